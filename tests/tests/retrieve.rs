use dualdb::{
    condition,
    stmt::{CompareOp, Comparison, Filter, Operand, Projection, Value},
    Model,
};
use pretty_assertions::assert_eq;
use tests::*;

const SCHEMA: &str = "
    CREATE TABLE books (
        isbn TEXT PRIMARY KEY,
        title TEXT,
        pages INTEGER,
        price REAL,
        cover BLOB,
        in_print INTEGER,
        subtitle TEXT
    );
";

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "books"]
#[collection = "books"]
struct Book {
    #[key]
    isbn: String,

    #[max_length(12)]
    title: String,

    pages: i32,

    price: f64,

    cover: Vec<u8>,

    in_print: bool,

    subtitle: Option<String>,
}

fn book() -> Book {
    Book {
        isbn: "978-1718503106".to_string(),
        title: "The Rust Programming Language".to_string(),
        pages: 560,
        price: 39.95,
        cover: vec![0x89, 0x50, 0x4e, 0x47],
        in_print: true,
        subtitle: None,
    }
}

fn setups() -> [Setup; 2] {
    [Setup::sqlite(SCHEMA), Setup::document()]
}

#[tokio::test]
async fn round_trip_by_primary_key() {
    for setup in setups() {
        assert_ok!(setup.db.insert(&book()).await);

        let found: Vec<Book> = assert_ok!(
            setup
                .db
                .retrieve(condition!("isbn = ?", "978-1718503106"))
                .await
        );

        let expected = Book {
            title: "The Rust Pro".to_string(),
            ..book()
        };
        assert_eq!(found, [expected]);
    }
}

#[tokio::test]
async fn retrieve_all_on_empty_backend() {
    for setup in setups() {
        let found: Vec<Book> = assert_ok!(setup.db.retrieve_all().await);
        assert!(found.is_empty());
        assert_eq!(setup.log.len(), 1);
    }
}

#[tokio::test]
async fn condition_on_relational_path() {
    let setup = Setup::sqlite(SCHEMA);

    let _: Vec<Book> = assert_ok!(setup.db.retrieve(condition!("pages > ?", 30)).await);

    let op = setup.log.pop();
    assert_eq!(op.sql(), Some(r#"SELECT * FROM "books" WHERE pages > ?1;"#));
    assert_eq!(op.params(), Some(&[Value::I32(30)][..]));
}

#[tokio::test]
async fn condition_on_document_path() {
    let setup = Setup::document();

    let _: Vec<Book> = assert_ok!(setup.db.retrieve(condition!("pages > ?", 30)).await);

    let mut expected = Filter::all();
    expected.push(Comparison::new(
        "pages",
        CompareOp::Gt,
        Operand::Value(Value::I32(30)),
    ));

    let DriverOp::Find {
        collection,
        filter,
        projection,
    } = setup.log.pop()
    else {
        panic!("expected find")
    };
    assert_eq!(collection, "books");
    assert_eq!(filter, expected);
    assert_eq!(projection, None);
}

#[tokio::test]
async fn conditions_filter_documents() {
    let setup = Setup::document();

    for (isbn, title, pages) in [("1", "Dune", 412), ("2", "Dracula", 418), ("3", "Emma", 474)] {
        assert_ok!(
            setup
                .db
                .insert(&Book {
                    isbn: isbn.to_string(),
                    title: title.to_string(),
                    pages,
                    ..book()
                })
                .await
        );
    }

    let titles = |books: Vec<Book>| books.into_iter().map(|b| b.title).collect::<Vec<_>>();

    let found: Vec<Book> = assert_ok!(setup.db.retrieve(condition!("title LIKE ?", "d%")).await);
    assert_eq!(titles(found), ["Dune", "Dracula"]);

    let found: Vec<Book> = assert_ok!(setup.db.retrieve(condition!("title = ?", "/a$/")).await);
    assert_eq!(titles(found), ["Dracula", "Emma"]);

    let found: Vec<Book> = assert_ok!(
        setup
            .db
            .retrieve(condition!("pages >= ? AND pages < ?", 418, 474))
            .await
    );
    assert_eq!(titles(found), ["Dracula"]);
}

#[tokio::test]
async fn like_on_relational_path() {
    let setup = Setup::sqlite(SCHEMA);
    assert_ok!(setup.db.insert(&book()).await);

    let found: Vec<Book> = assert_ok!(setup.db.retrieve(condition!("title LIKE ?", "The%")).await);
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn condition_errors_never_reach_backend() {
    for setup in setups() {
        let err = assert_err!(
            setup
                .db
                .retrieve::<Book>(condition!("pages > ? AND title = ?", 30))
                .await
        );
        assert!(err.is_arity_mismatch());

        let err = assert_err!(
            setup
                .db
                .retrieve::<Book>(condition!("pages > ?", 30, 40))
                .await
        );
        assert!(err.is_arity_mismatch());

        assert!(setup.log.is_empty());
    }

    let setup = Setup::document();
    let err = assert_err!(setup.db.retrieve::<Book>(condition!("pages <> ?", 30)).await);
    assert!(err.is_unsupported_operator());
    assert!(setup.log.is_empty());
}

#[derive(Debug, PartialEq, Model)]
#[table = "books"]
#[collection = "books"]
struct BookSummary {
    #[key]
    isbn: String,

    title: Option<String>,

    pages: Option<i32>,
}

#[tokio::test]
async fn projection_limits_loaded_fields() {
    for setup in setups() {
        assert_ok!(setup.db.insert(&book()).await);
        setup.log.clear();

        let found: Vec<BookSummary> = assert_ok!(
            setup
                .db
                .retrieve_projected(condition!("pages > ?", 1), &Projection::include(["isbn", "title"]))
                .await
        );
        assert_eq!(
            found,
            [BookSummary {
                isbn: "978-1718503106".to_string(),
                title: Some("The Rust Pro".to_string()),
                pages: None,
            }]
        );

        match setup.log.pop() {
            DriverOp::Query { sql, .. } => {
                assert_eq!(sql, r#"SELECT "isbn", "title" FROM "books" WHERE pages > ?1;"#)
            }
            DriverOp::Find { projection, .. } => {
                assert_eq!(projection, Some(Projection::include(["isbn", "title"])))
            }
            op => panic!("unexpected op {op:?}"),
        }
    }
}

#[tokio::test]
async fn exclusion_projection_resolves_columns() {
    let setup = Setup::sqlite(SCHEMA);
    assert_ok!(setup.db.insert(&book()).await);
    setup.log.clear();

    let projection = assert_ok!(Projection::parse(r#"{ "title": 0 }"#));
    let found: Vec<BookSummary> =
        assert_ok!(setup.db.retrieve_projected("", &projection).await);

    assert_eq!(found[0].title, None);
    assert_eq!(found[0].pages, Some(560));
    assert_eq!(
        setup.log.pop().sql(),
        Some(r#"SELECT "isbn", "pages" FROM "books";"#)
    );
}

#[tokio::test]
async fn load_errors_name_the_field() {
    let setup = Setup::document();
    setup.seed(
        "books",
        [("isbn", Value::from("1")), ("pages", Value::from("many"))]
            .into_iter()
            .collect(),
    );

    let err = assert_err!(setup.db.retrieve_all::<BookSummary>().await);
    assert!(err.root().is_type_conversion());
    assert!(err.to_string().starts_with("loading `BookSummary.pages`"));
}
