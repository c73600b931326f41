use crate::value;

use bson::{doc, Bson, Document, Regex};
use dualdb_core::{
    stmt::{CompareOp, Comparison, Filter, Operand, Projection},
    Error, Result,
};

/// Builds the query document for a filter. Comparisons on distinct fields
/// share one flat document; when a field repeats, they are combined under
/// `$and`.
pub fn to_document(filter: &Filter) -> Result<Document> {
    let mut seen = std::collections::HashSet::new();
    let repeats = filter
        .iter()
        .any(|comparison| !seen.insert(comparison.field.as_str()));

    if repeats {
        let clauses = filter
            .iter()
            .map(|comparison| {
                let mut clause = Document::new();
                clause.insert(comparison.field.clone(), predicate(comparison)?);
                Ok(Bson::Document(clause))
            })
            .collect::<Result<Vec<_>>>()?;

        return Ok(doc! { "$and": clauses });
    }

    let mut document = Document::new();

    for comparison in filter.iter() {
        document.insert(comparison.field.clone(), predicate(comparison)?);
    }

    Ok(document)
}

fn predicate(comparison: &Comparison) -> Result<Bson> {
    let op = comparison.op;

    Ok(match &comparison.operand {
        Operand::Regex(pattern) => {
            let regex = Regex {
                pattern: pattern.clone(),
                options: if op.is_like() { "i".to_string() } else { String::new() },
            };

            match op {
                CompareOp::Ne => operator_document("$not", Bson::RegularExpression(regex)),
                CompareOp::Eq | CompareOp::Like => {
                    let mut document = doc! { "$regex": regex.pattern };
                    if !regex.options.is_empty() {
                        document.insert("$options", regex.options);
                    }
                    Bson::Document(document)
                }
                // Ordering against a pattern compares its source text.
                _ => operator_document(operator(op), Bson::String(pattern.clone())),
            }
        }
        Operand::Value(v) => operator_document(operator(op), value::to_bson(v)?),
        Operand::Json(json) => {
            operator_document(operator(op), bson::to_bson(json).map_err(Error::driver)?)
        }
    })
}

fn operator_document(operator: &str, operand: Bson) -> Bson {
    let mut document = Document::new();
    document.insert(operator, operand);
    Bson::Document(document)
}

fn operator(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq | CompareOp::Like => "$eq",
        CompareOp::Ne => "$ne",
        CompareOp::Gt => "$gt",
        CompareOp::Lt => "$lt",
        CompareOp::Ge => "$gte",
        CompareOp::Le => "$lte",
    }
}

pub fn projection_document(projection: &Projection) -> Document {
    let flag = if projection.is_include() { 1 } else { 0 };

    projection
        .fields()
        .iter()
        .map(|field| (field.clone(), Bson::Int32(flag)))
        .collect()
}
