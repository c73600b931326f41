use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{Delete, Insert, Select, Statement, Update, Where};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = self.columns.iter().map(Ident);

        fmt!(
            f,
            "INSERT INTO ",
            Ident(&self.table),
            " (",
            Comma(columns),
            ") VALUES (",
            Comma(&self.values),
            ")",
        );
    }
}

impl ToSql for &Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let assignments = self
            .assignments
            .iter()
            .map(|(column, value)| Assignment(column, value));

        fmt!(
            f,
            "UPDATE ",
            Ident(&self.table),
            " SET ",
            Comma(assignments),
            " WHERE ",
            &self.filter,
        );
    }
}

impl ToSql for &Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "DELETE FROM ", Ident(&self.table), " WHERE ", &self.filter);
    }
}

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str("SELECT ");

        match &self.columns {
            Some(columns) => fmt!(f, Comma(columns.iter().map(Ident))),
            None => f.dst.push('*'),
        }

        fmt!(f, " FROM ", Ident(&self.table));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE ", filter);
        }
    }
}

impl ToSql for &Where {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Where::Condition { text, params } => {
                // Every `?` in the caller's text is rebound in order, so the
                // placeholders continue after any already pushed values.
                let mut params = params.iter();
                let mut rest = text.as_str();

                while let Some(pos) = rest.find('?') {
                    f.dst.push_str(&rest[..pos]);
                    if let Some(value) = params.next() {
                        value.to_sql(f);
                    }
                    rest = &rest[pos + 1..];
                }

                f.dst.push_str(rest);
            }
            Where::Eq { column, value } => {
                fmt!(f, Ident(column), " = ", value);
            }
        }
    }
}

struct Assignment<'a>(&'a String, &'a dualdb_core::stmt::Value);

impl ToSql for Assignment<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(self.0), " = ", self.1);
    }
}
