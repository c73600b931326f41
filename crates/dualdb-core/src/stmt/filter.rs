use super::{CompareOp, Value};
use std::fmt;

/// A flat conjunction of comparisons, the structured form of a condition on
/// the document path. An empty filter matches every document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    comparisons: Vec<Comparison>,
}

/// A single `field OP operand` test.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub field: String,
    pub op: CompareOp,
    pub operand: Operand,
}

/// The right-hand side of a comparison after literal typing.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A plain literal: string, number, boolean, object id or null.
    Value(Value),

    /// A regular expression source, without delimiters.
    Regex(String),

    /// A parameter with no native literal form, serialized as JSON.
    Json(serde_json::Value),
}

impl Filter {
    /// The filter that matches everything.
    pub fn all() -> Filter {
        Filter::default()
    }

    /// A single equality test, used to target a document by primary key.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        let mut filter = Filter::all();
        filter.push(Comparison::new(
            field,
            CompareOp::Eq,
            Operand::Value(value.into()),
        ));
        filter
    }

    pub fn push(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Comparison> + '_ {
        self.comparisons.iter()
    }
}

impl Comparison {
    pub fn new(field: impl Into<String>, op: CompareOp, operand: Operand) -> Comparison {
        Comparison {
            field: field.into(),
            op,
            operand,
        }
    }
}

impl Operand {
    /// Types a condition parameter for the document path.
    ///
    /// Strings delimited by `/…/` become regular expressions. Under `LIKE`,
    /// other strings are converted from `%`/`_` wildcards into an anchored
    /// regular expression.
    pub fn from_param(op: CompareOp, param: &Value) -> Operand {
        match param {
            Value::String(s) if is_regex_literal(s) => Operand::Regex(s[1..s.len() - 1].to_string()),
            Value::String(s) if op.is_like() => Operand::Regex(like_to_regex(s)),
            Value::Bytes(_) | Value::List(_) => Operand::Json(param.to_json()),
            _ => Operand::Value(param.clone()),
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Operand::Value(value) => Some(value),
            _ => None,
        }
    }
}

fn is_regex_literal(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('/') && s.ends_with('/')
}

/// Converts a SQL `LIKE` pattern into an anchored regular expression.
pub(crate) fn like_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    out.push('^');

    for ch in pattern.chars() {
        match ch {
            '%' => out.push_str(".*"),
            '_' => out.push('.'),
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^'
            | '$' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    out.push('$');
    out
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comparisons.is_empty() {
            return f.write_str("{}");
        }

        for (i, cmp) in self.comparisons.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{} {} {}", cmp.field, cmp.op, cmp.operand)?;
        }
        Ok(())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(Value::String(s)) => write!(f, "{s:?}"),
            Operand::Value(Value::ObjectId(id)) => write!(f, "{id:?}"),
            Operand::Value(value) => fmt::Display::fmt(&value.to_json(), f),
            Operand::Regex(re) => write!(f, "/{re}/"),
            Operand::Json(json) => fmt::Display::fmt(json, f),
        }
    }
}
