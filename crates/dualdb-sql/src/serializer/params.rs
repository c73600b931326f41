use super::{Formatter, ToSql};

use dualdb_core::{stmt, Flavor};

pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// 1-based position of a bound parameter.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
            Flavor::Sqlite => {
                f.dst.push('?');
                f.dst.push_str(&self.0.to_string());
            }
        }
    }
}

impl ToSql for &stmt::Value {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        placeholder.to_sql(f);
    }
}
