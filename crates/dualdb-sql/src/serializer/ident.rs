use super::{Formatter, Params, ToSql};

use dualdb_core::Flavor;

/// A quoted identifier. Embedded quote characters are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quote = match f.serializer.flavor {
            Flavor::Mysql => '`',
            Flavor::Postgresql | Flavor::Sqlite => '"',
        };

        f.dst.push(quote);
        for ch in self.0.as_ref().chars() {
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}
