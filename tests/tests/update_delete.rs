use dualdb::{
    condition,
    stmt::{CompareOp, Comparison, Filter, Operand, Value},
    Model,
};
use pretty_assertions::assert_eq;
use tests::*;

const SCHEMA: &str = "
    CREATE TABLE people (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER
    );
";

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "people"]
#[collection = "people"]
struct Person {
    #[key]
    #[auto]
    id: Option<i64>,

    #[not_null]
    name: String,

    age: Option<i64>,
}

fn person(id: Option<i64>, name: &str, age: Option<i64>) -> Person {
    Person {
        id,
        name: name.to_string(),
        age,
    }
}

async fn seeded_sqlite() -> Setup {
    let setup = Setup::sqlite(SCHEMA);

    for (name, age) in [("Ann", 31), ("Bo", 17), ("Cy", 45)] {
        assert_ok!(setup.db.insert(&person(None, name, Some(age))).await);
    }

    setup.log.clear();
    setup
}

#[tokio::test]
async fn update_targets_primary_key() {
    let setup = seeded_sqlite().await;

    let count = assert_ok!(setup.db.update(&person(Some(2), "Bob", None)).await);
    assert_eq!(count, 1);

    let op = setup.log.pop();
    assert_eq!(
        op.sql(),
        Some(r#"UPDATE "people" SET "name" = ?1 WHERE "id" = ?2;"#)
    );
    assert_eq!(op.params(), Some(&[Value::from("Bob"), Value::I64(2)][..]));

    let people: Vec<Person> = assert_ok!(setup.db.retrieve(condition!("id = ?", 2)).await);
    assert_eq!(people, [person(Some(2), "Bob", Some(17))]);
}

#[tokio::test]
async fn update_with_condition_ignores_primary_key() {
    let setup = seeded_sqlite().await;

    let count = assert_ok!(
        setup
            .db
            .update_where(&person(None, "Adult", None), condition!("age >= ?", 18))
            .await
    );
    assert_eq!(count, 2);
    assert_eq!(
        setup.log.pop().sql(),
        Some(r#"UPDATE "people" SET "name" = ?1 WHERE age >= ?2;"#)
    );
}

#[tokio::test]
async fn missing_target_key_without_condition() {
    for setup in [Setup::sqlite(SCHEMA), Setup::document()] {
        let keyless = person(None, "Ann", Some(31));

        let err = assert_err!(setup.db.update(&keyless).await);
        assert!(err.is_missing_target_key());

        let err = assert_err!(setup.db.delete(&keyless).await);
        assert!(err.is_missing_target_key());

        // A blank condition falls back to the primary key.
        let err = assert_err!(setup.db.delete_where(&keyless, "  ").await);
        assert!(err.is_missing_target_key());

        assert!(setup.log.is_empty());
    }
}

#[tokio::test]
async fn update_with_nothing_to_set() {
    #[derive(Debug, Model)]
    #[table = "tags"]
    #[collection = "tags"]
    struct Tag {
        #[key]
        label: String,
    }

    let setup = Setup::document();
    let err = assert_err!(
        setup
            .db
            .update(&Tag {
                label: "rust".to_string()
            })
            .await
    );
    assert!(err.is_no_updatable_fields());
    assert!(setup.log.is_empty());
}

#[tokio::test]
async fn delete_by_key_and_by_condition() {
    let setup = seeded_sqlite().await;

    let count = assert_ok!(setup.db.delete(&person(Some(1), "Ann", None)).await);
    assert_eq!(count, 1);
    assert_eq!(
        setup.log.pop().sql(),
        Some(r#"DELETE FROM "people" WHERE "id" = ?1;"#)
    );

    let count = assert_ok!(
        setup
            .db
            .delete_where(&person(None, "", None), condition!("age < ?", 18))
            .await
    );
    assert_eq!(count, 1);
    assert_eq!(
        setup.log.pop().sql(),
        Some(r#"DELETE FROM "people" WHERE age < ?1;"#)
    );

    let remaining: Vec<Person> = assert_ok!(setup.db.retrieve_all().await);
    assert_eq!(remaining, [person(Some(3), "Cy", Some(45))]);
}

#[tokio::test]
async fn document_update_and_delete() {
    let setup = Setup::document();

    for (id, name, age) in [(1, "Ann", 31), (2, "Bo", 17)] {
        setup.seed(
            "people",
            [
                ("id", Value::I64(id)),
                ("name", Value::from(name)),
                ("age", Value::I64(age)),
            ]
            .into_iter()
            .collect(),
        );
    }

    let count = assert_ok!(setup.db.update(&person(Some(2), "Bob", Some(18))).await);
    assert_eq!(count, 1);

    let DriverOp::UpdateMany { filter, set, .. } = setup.log.pop() else {
        panic!("expected update_many")
    };
    assert_eq!(filter, Filter::eq("id", 2_i64));
    assert_eq!(set.keys().collect::<Vec<_>>(), ["name", "age"]);

    let count = assert_ok!(
        setup
            .db
            .delete_where(&person(None, "", None), condition!("age > ?", 30))
            .await
    );
    assert_eq!(count, 1);

    let mut expected = Filter::all();
    expected.push(Comparison::new(
        "age",
        CompareOp::Gt,
        Operand::Value(Value::I32(30)),
    ));
    assert_eq!(setup.log.pop().filter(), Some(&expected));

    let people: Vec<Person> = assert_ok!(setup.db.retrieve_all().await);
    assert_eq!(people, [person(Some(2), "Bob", Some(18))]);
}

#[tokio::test]
async fn document_update_counts_only_changed_documents() {
    let setup = Setup::document();
    setup.seed(
        "people",
        [
            ("id", Value::I64(1)),
            ("name", Value::from("Ann")),
            ("age", Value::I64(31)),
        ]
        .into_iter()
        .collect(),
    );

    let unchanged = person(Some(1), "Ann", Some(31));
    let count = assert_ok!(setup.db.update(&unchanged).await);
    assert_eq!(count, 0);

    let count = assert_ok!(setup.db.update(&person(Some(1), "Ann", Some(32))).await);
    assert_eq!(count, 1);

    let people: Vec<Person> = assert_ok!(setup.db.retrieve_all().await);
    assert_eq!(people, [person(Some(1), "Ann", Some(32))]);
}
