use super::Record;
use crate::{Error, Result};

/// Field selection for a retrieve: either the fields to keep or the fields to
/// drop.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl Projection {
    pub fn include<I, S>(fields: I) -> Projection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Include(fields.into_iter().map(Into::into).collect())
    }

    pub fn exclude<I, S>(fields: I) -> Projection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Exclude(fields.into_iter().map(Into::into).collect())
    }

    /// Parses a document-store style projection such as `{"name": 1, "age": 1}`
    /// or `{"password": 0}`. Values may be numbers or booleans; inclusion and
    /// exclusion cannot be mixed.
    pub fn parse(json: &str) -> Result<Projection> {
        let spec: serde_json::Value = serde_json::from_str(json)?;

        let Some(object) = spec.as_object() else {
            bail!("projection must be a JSON object; got `{json}`");
        };

        let mut include = vec![];
        let mut exclude = vec![];

        for (field, flag) in object {
            let keep = match flag {
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::Number(n) => n.as_f64() != Some(0.0),
                _ => bail!("projection value for `{field}` must be a number or boolean"),
            };

            if keep {
                include.push(field.clone());
            } else {
                exclude.push(field.clone());
            }
        }

        match (include.is_empty(), exclude.is_empty()) {
            (false, true) => Ok(Projection::Include(include)),
            (true, _) => Ok(Projection::Exclude(exclude)),
            (false, false) => Err(Error::from_args(format_args!(
                "projection cannot mix inclusion and exclusion"
            ))),
        }
    }

    pub fn fields(&self) -> &[String] {
        match self {
            Projection::Include(fields) | Projection::Exclude(fields) => fields,
        }
    }

    pub fn is_include(&self) -> bool {
        matches!(self, Projection::Include(_))
    }

    /// Whether `field` survives the projection.
    pub fn keeps(&self, field: &str) -> bool {
        let listed = self.fields().iter().any(|f| f == field);
        self.is_include() == listed
    }

    /// Resolves the projection against the full, ordered list of columns.
    /// Included columns keep the projection's order.
    pub fn columns<'a>(&self, all: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        match self {
            Projection::Include(fields) => fields.clone(),
            Projection::Exclude(_) => all
                .into_iter()
                .filter(|col| self.keeps(col))
                .map(str::to_string)
                .collect(),
        }
    }

    /// Drops the fields of `record` that the projection does not keep.
    pub fn apply(&self, record: Record) -> Record {
        record
            .into_iter()
            .filter(|(name, _)| self.keeps(name))
            .collect()
    }
}
