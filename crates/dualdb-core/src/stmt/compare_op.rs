use std::fmt;

/// Comparison operators understood by the condition language.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Like,
}

impl CompareOp {
    /// Matches operator text. Word operators are expected upper-cased.
    pub fn from_text(text: &str) -> Option<CompareOp> {
        Some(match text {
            "=" => CompareOp::Eq,
            "!=" => CompareOp::Ne,
            ">" => CompareOp::Gt,
            "<" => CompareOp::Lt,
            ">=" => CompareOp::Ge,
            "<=" => CompareOp::Le,
            "LIKE" => CompareOp::Like,
            _ => return None,
        })
    }

    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_like(self) -> bool {
        matches!(self, Self::Like)
    }

    /// Whether `ordering` (of stored value relative to operand) satisfies the
    /// operator. `Like` is never satisfied by an ordering.
    pub fn holds(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;

        match self {
            Self::Eq => ordering == Equal,
            Self::Ne => ordering != Equal,
            Self::Gt => ordering == Greater,
            Self::Lt => ordering == Less,
            Self::Ge => ordering != Less,
            Self::Le => ordering != Greater,
            Self::Like => false,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompareOp::*;

        match self {
            Eq => "=".fmt(f),
            Ne => "!=".fmt(f),
            Gt => ">".fmt(f),
            Lt => "<".fmt(f),
            Ge => ">=".fmt(f),
            Le => "<=".fmt(f),
            Like => "LIKE".fmt(f),
        }
    }
}

impl fmt::Debug for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
