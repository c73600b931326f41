use dualdb::{stmt::Value, ConstraintViolation, Model};
use pretty_assertions::assert_eq;
use tests::*;

const SCHEMA: &str = "
    CREATE TABLE people (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER,
        email TEXT
    );
";

#[derive(Debug, Clone, PartialEq, Default, Model)]
#[table = "people"]
#[collection = "people"]
struct Person {
    #[key]
    #[auto]
    id: Option<i64>,

    #[not_null]
    #[max_length(8)]
    name: Option<String>,

    age: Option<i64>,

    email: Option<String>,
}

fn ann() -> Person {
    Person {
        id: None,
        name: Some("Ann".to_string()),
        age: Some(31),
        email: None,
    }
}

#[tokio::test]
async fn relational_insert_skips_auto_field() {
    let setup = Setup::sqlite(SCHEMA);

    let count = assert_ok!(setup.db.insert(&ann()).await);
    assert_eq!(count, 1);

    assert_eq!(setup.log.len(), 1);
    let op = setup.log.pop();
    assert_eq!(
        op.sql(),
        Some(r#"INSERT INTO "people" ("name", "age", "email") VALUES (?1, ?2, ?3);"#)
    );
    assert_eq!(
        op.params(),
        Some(&[Value::from("Ann"), Value::I64(31), Value::Null][..])
    );
}

#[tokio::test]
async fn document_insert_skips_auto_field() {
    let setup = Setup::document();

    let count = assert_ok!(setup.db.insert(&ann()).await);
    assert_eq!(count, 1);

    let DriverOp::InsertOne {
        collection,
        document,
    } = setup.log.pop()
    else {
        panic!("expected insert_one")
    };

    assert_eq!(collection, "people");
    assert_eq!(document.keys().collect::<Vec<_>>(), ["name", "age", "email"]);
    assert_eq!(setup.documents("people"), [document]);
}

#[tokio::test]
async fn missing_required_field_never_reaches_backend() {
    let nameless = Person {
        name: None,
        ..ann()
    };

    for setup in [Setup::sqlite(SCHEMA), Setup::document()] {
        let err = assert_err!(setup.db.insert(&nameless).await);
        assert_eq!(
            err.constraint_violation(),
            Some(ConstraintViolation::MissingRequiredField)
        );

        let err = assert_err!(setup.db.update_where(&nameless, "age > ?").await);
        assert_eq!(
            err.constraint_violation(),
            Some(ConstraintViolation::MissingRequiredField)
        );

        assert!(setup.log.is_empty());
    }
}

#[tokio::test]
async fn over_length_strings_are_truncated() {
    let setup = Setup::document();

    let long = Person {
        name: Some("Maximilian".to_string()),
        ..ann()
    };
    let exact = Person {
        name: Some("Jennifer".to_string()),
        ..ann()
    };

    assert_ok!(setup.db.insert(&long).await);
    assert_ok!(setup.db.insert(&exact).await);

    let names: Vec<_> = setup
        .documents("people")
        .iter()
        .map(|doc| doc.get("name").cloned())
        .collect();

    assert_eq!(
        names,
        [Some(Value::from("Maximili")), Some(Value::from("Jennifer"))]
    );

    // Storing the truncated value again leaves it unchanged.
    let people: Vec<Person> = assert_ok!(setup.db.retrieve_all().await);
    assert_ok!(setup.db.insert(&people[0]).await);
    assert_eq!(
        setup.documents("people")[2].get("name"),
        Some(&Value::from("Maximili"))
    );
}

#[tokio::test]
async fn max_length_on_non_string_is_a_type_mismatch() {
    #[derive(Debug, Model)]
    #[table = "counters"]
    #[collection = "counters"]
    struct Counter {
        #[max_length(3)]
        value: i64,
    }

    let setup = Setup::document();

    let err = assert_err!(setup.db.insert(&Counter { value: 12345 }).await);
    assert_eq!(
        err.constraint_violation(),
        Some(ConstraintViolation::TypeMismatch)
    );
    assert!(setup.log.is_empty());
}

#[tokio::test]
async fn backend_affinity_limits_written_fields() {
    #[derive(Debug, Model)]
    #[table = "events"]
    #[collection = "events"]
    struct Event {
        name: String,

        #[sql_only]
        shard: i64,

        #[document_only]
        source: String,
    }

    let event = Event {
        name: "login".to_string(),
        shard: 3,
        source: "web".to_string(),
    };

    let setup = Setup::sqlite("CREATE TABLE events (name TEXT, shard INTEGER);");
    assert_ok!(setup.db.insert(&event).await);
    assert_eq!(
        setup.log.pop().sql(),
        Some(r#"INSERT INTO "events" ("name", "shard") VALUES (?1, ?2);"#)
    );

    let setup = Setup::document();
    assert_ok!(setup.db.insert(&event).await);
    assert_eq!(
        setup.documents("events")[0].keys().collect::<Vec<_>>(),
        ["name", "source"]
    );
}
