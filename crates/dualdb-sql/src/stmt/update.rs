use super::Where;
use dualdb_core::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// `SET` pairs, in order
    pub assignments: Vec<(String, Value)>,

    pub filter: Where,
}
