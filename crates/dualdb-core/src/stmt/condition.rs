use super::lexer::{Lexer, Token};
use super::{CompareOp, Comparison, Filter, Operand, Value};
use crate::{Error, Result};

/// A textual predicate with positional `?` placeholders and the parameters
/// that fill them, left to right.
///
/// On the relational path the text is trusted verbatim and the parameters are
/// bound by the driver. On the document path the text is parsed into a flat
/// conjunction of `field OP ?` comparisons; text outside that shape is
/// ignored. A reserved word such as `match` or `in` is a field when it starts a
/// comparison and an operator only between a field and its `?`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Condition {
    text: String,
    params: Vec<Value>,
}

impl Condition {
    pub fn new(text: impl Into<String>) -> Condition {
        Condition {
            text: text.into(),
            params: vec![],
        }
    }

    /// Appends the next positional parameter.
    pub fn param(mut self, value: impl Into<Value>) -> Condition {
        self.params.push(value.into());
        self
    }

    pub fn params<I>(mut self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.params.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn values(&self) -> &[Value] {
        &self.params
    }

    /// A blank condition is treated as no condition at all.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Every `?` in the text counts, wherever it appears.
    pub fn placeholder_count(&self) -> usize {
        self.text.matches('?').count()
    }

    pub fn check_arity(&self) -> Result<()> {
        let expected = self.placeholder_count();

        if expected != self.params.len() {
            return Err(Error::arity_mismatch(expected, self.params.len()));
        }

        Ok(())
    }

    /// The clause text for a SQL `WHERE`, after the arity check.
    pub fn relational_clause(&self) -> Result<&str> {
        self.check_arity()?;
        Ok(self.text.trim())
    }

    /// Parses the condition into a document filter.
    pub fn to_filter(&self) -> Result<Filter> {
        self.check_arity()?;

        let mut lexer = Lexer::new(&self.text);
        let mut params = self.params.iter();
        let mut filter = Filter::all();

        while let Some(token) = lexer.next() {
            match token {
                Token::Ident(_) if token.is_connective() && !starts_comparison(&mut lexer) => {}
                Token::Ident(field) => {
                    let Some(op) = take_operator(&mut lexer) else {
                        continue;
                    };

                    let op = CompareOp::from_text(&op)
                        .ok_or_else(|| Error::unsupported_operator(op.as_str()))?;

                    // Arity was checked above so there is always a parameter
                    // for each placeholder.
                    let Some(param) = params.next() else { break };

                    filter.push(Comparison::new(
                        field,
                        op,
                        Operand::from_param(op, param),
                    ));
                }
                Token::Placeholder => {
                    params.next();
                }
                _ => {}
            }
        }

        Ok(filter)
    }
}

/// True when the next tokens are a single punctuation operator and its `?`,
/// which makes a preceding `and`/`or` a field name rather than a connective.
fn starts_comparison(lexer: &mut Lexer<'_>) -> bool {
    matches!(lexer.peek_nth(0), Some(Token::Op(_)))
        && lexer.peek_nth(1) == Some(&Token::Placeholder)
}

/// Consumes `<op>... ?` following a field, returning the operator text. Leaves
/// the lexer untouched when the next tokens are not of that shape.
fn take_operator(lexer: &mut Lexer<'_>) -> Option<String> {
    let mut n = 0;
    let mut parts = vec![];

    while let Some(text) = lexer.peek_nth(n).and_then(Token::op_text) {
        parts.push(text.to_string());
        n += 1;
    }

    if parts.is_empty() || lexer.peek_nth(n) != Some(&Token::Placeholder) {
        return None;
    }

    for _ in 0..=n {
        lexer.next();
    }

    Some(parts.join(" "))
}

impl From<&str> for Condition {
    fn from(text: &str) -> Condition {
        Condition::new(text)
    }
}

impl From<String> for Condition {
    fn from(text: String) -> Condition {
        Condition::new(text)
    }
}
