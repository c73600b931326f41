use dualdb::{
    driver::DocumentStore,
    stmt::{CompareOp, Comparison, Filter, Operand, Projection, Record, Value},
    Error, Result,
};
use dualdb_core::async_trait;
use regex::RegexBuilder;
use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Document store holding collections in memory. Clones share the same
/// collections.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Record>>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn documents(&self, collection: &str) -> Vec<Record> {
        self.collections
            .lock()
            .expect("collections poisoned")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn seed(&self, collection: &str, document: Record) {
        self.collections
            .lock()
            .expect("collections poisoned")
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Record>> {
        let mut found = vec![];

        for document in self.documents(collection) {
            if matches(filter, &document)? {
                found.push(match projection {
                    Some(projection) => project(projection, document),
                    None => document,
                });
            }
        }

        Ok(found)
    }

    async fn insert_one(&self, collection: &str, document: Record) -> Result<bool> {
        self.seed(collection, document);
        Ok(true)
    }

    async fn update_many(&self, collection: &str, filter: &Filter, set: Record) -> Result<u64> {
        let mut collections = self.collections.lock().expect("collections poisoned");
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let mut modified = 0;

        for document in documents.iter_mut() {
            if !matches(filter, document)? {
                continue;
            }

            let mut changed = false;

            for (field, value) in set.iter() {
                if document.get(field) != Some(value) {
                    document.insert(field, value.clone());
                    changed = true;
                }
            }

            modified += u64::from(changed);
        }

        Ok(modified)
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64> {
        let mut collections = self.collections.lock().expect("collections poisoned");
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = documents.len();
        let mut kept = Vec::with_capacity(before);

        for document in documents.drain(..) {
            if !matches(filter, &document)? {
                kept.push(document);
            }
        }

        *documents = kept;
        Ok((before - documents.len()) as u64)
    }
}

/// `_id` comes back on an include projection even when it is not listed.
fn project(projection: &Projection, document: Record) -> Record {
    let id = document
        .get(ID)
        .filter(|_| projection.is_include() && !projection.keeps(ID))
        .cloned();

    let projected = projection.apply(document);

    match id {
        Some(id) => std::iter::once((ID.to_string(), id))
            .chain(projected)
            .collect(),
        None => projected,
    }
}

const ID: &str = "_id";

fn matches(filter: &Filter, document: &Record) -> Result<bool> {
    for comparison in filter.iter() {
        if !compare(comparison, document.get(&comparison.field))? {
            return Ok(false);
        }
    }

    Ok(true)
}

fn compare(comparison: &Comparison, actual: Option<&Value>) -> Result<bool> {
    let op = comparison.op;

    Ok(match &comparison.operand {
        Operand::Value(expected) => match op {
            CompareOp::Eq | CompareOp::Like => equals(actual, expected),
            CompareOp::Ne => !equals(actual, expected),
            op => actual
                .and_then(|actual| ordering(actual, expected))
                .is_some_and(|ordering| op.holds(ordering)),
        },
        Operand::Regex(src) => {
            let regex = RegexBuilder::new(src)
                .case_insensitive(op.is_like())
                .build()
                .map_err(Error::driver)?;
            let hit = matches!(actual, Some(Value::String(s)) if regex.is_match(s));
            if op == CompareOp::Ne {
                !hit
            } else {
                hit
            }
        }
        Operand::Json(json) => {
            let hit = actual.is_some_and(|actual| actual.to_json() == *json);
            if op == CompareOp::Ne {
                !hit
            } else {
                hit
            }
        }
    })
}

/// A missing field equals null. Numbers compare across widths.
fn equals(actual: Option<&Value>, expected: &Value) -> bool {
    match actual {
        None => expected.is_null(),
        Some(actual) => match (actual.as_f64(), expected.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => actual == expected,
        },
    }
}

fn ordering(actual: &Value, expected: &Value) -> Option<Ordering> {
    match (actual, expected) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::ObjectId(a), Value::ObjectId(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        _ => actual.as_f64()?.partial_cmp(&expected.as_f64()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualdb::condition;

    fn person(name: &str, age: i64) -> Record {
        [("name", Value::from(name)), ("age", Value::I64(age))]
            .into_iter()
            .collect()
    }

    fn matches(filter: &Filter, document: &Record) -> bool {
        super::matches(filter, document).expect("invalid pattern")
    }

    fn filter(condition: dualdb::Condition) -> Filter {
        condition.to_filter().expect("invalid condition")
    }

    #[test]
    fn numeric_comparisons_cross_widths() {
        let doc = person("Ann", 31);
        assert!(matches(&filter(condition!("age > ?", 30)), &doc));
        assert!(!matches(&filter(condition!("age > ?", 31_i64)), &doc));
        assert!(matches(&filter(condition!("age = ?", 31.0)), &doc));
    }

    #[test]
    fn missing_fields_equal_null() {
        let doc = person("Ann", 31);
        assert!(matches(&filter(condition!("nick = ?", Value::Null)), &doc));
        assert!(!matches(&filter(condition!("nick > ?", 1)), &doc));
    }

    #[test]
    fn like_is_case_insensitive() {
        let doc = person("Annabel", 31);
        assert!(matches(&filter(condition!("name LIKE ?", "ann%")), &doc));
        assert!(!matches(&filter(condition!("name LIKE ?", "bel%")), &doc));
        assert!(matches(&filter(condition!("name = ?", "/bel$/")), &doc));
    }

    #[test]
    fn regex_literals_use_full_syntax() {
        let doc = person("Annabel", 31);
        assert!(matches(&filter(condition!("name = ?", "/^(Ann|Bo)[a-z]{2,}$/")), &doc));
        assert!(!matches(&filter(condition!("name = ?", "/^Ann[0-9]?$/")), &doc));
        assert!(matches(&filter(condition!("name != ?", "/^Bo/")), &doc));
    }

    #[test]
    fn malformed_regex_is_an_error() {
        let doc = person("Ann", 31);
        let filter = filter(condition!("name = ?", "/(unclosed/"));
        let err = super::matches(&filter, &doc).unwrap_err();
        assert!(err.is_driver());
    }

    #[tokio::test]
    async fn include_projection_keeps_object_id() {
        let store = MemoryStore::new();
        let mut doc = person("Ann", 31);
        doc.insert("_id", "65a1b2c3d4e5f60718293a4b");
        store.seed("people", doc);

        let found = store
            .find("people", &Filter::all(), Some(&Projection::include(["name"])))
            .await
            .unwrap();
        assert_eq!(found[0].keys().collect::<Vec<_>>(), ["_id", "name"]);

        let found = store
            .find("people", &Filter::all(), Some(&Projection::include(["name", "_id"])))
            .await
            .unwrap();
        assert_eq!(found[0].keys().collect::<Vec<_>>(), ["name", "_id"]);

        let found = store
            .find("people", &Filter::all(), Some(&Projection::exclude(["_id"])))
            .await
            .unwrap();
        assert_eq!(found[0].keys().collect::<Vec<_>>(), ["name", "age"]);
    }
}
