//! Structured where-clause grammar: an ordered mapping from field name to a
//! value expression, normalized into the same clause representation the
//! call-name path produces. Independent of call-name tokenization.

use crate::{
    error::ResolveError,
    spec::{Clause, Connector, Operator},
    value::Value,
};
use serde::{Deserialize, Serialize};


///
/// Where
///
/// Order-preserving field/expression mapping. Entry order becomes clause
/// order, so a caller mixing `and` and `or` keeps control of grouping.
///

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Where {
    entries: Vec<(String, Value)>,
}

impl Where {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one field/expression entry.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, expr: impl Into<Value>) -> Self {
        self.entries.push((name.into(), expr.into()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, expr)| (name.as_str(), expr))
    }
}

/// Parse a where mapping into clauses, in entry order.
pub fn parse_where(filter: &Where) -> Result<Vec<Clause>, ResolveError> {
    let mut clauses = Vec::with_capacity(filter.len());

    for (field, expr) in filter.iter() {
        parse_entry(&mut clauses, field, expr)?;
    }

    Ok(clauses)
}

/// Expression forms, most specific first:
///
/// 1. bare scalar                    -> equality, `and`
/// 2. `[value]`                      -> equality, `and`
/// 3. `[op, value]`                  -> comparison with `op`, `and`
/// 4. `[conn, op, value]`            -> comparison with explicit connector
/// 5. `[conn, field, op, value]`     -> as (4) with the field overridden
///
/// In forms (3) and (4) a composite statement token (`in`, `between`, and
/// their `or`/`not` variants) produces a membership or range clause
/// instead.
fn parse_entry(clauses: &mut Vec<Clause>, field: &str, expr: &Value) -> Result<(), ResolveError> {
    let Value::List(items) = expr else {
        clauses.push(Clause::compare(
            Connector::And,
            field,
            Operator::Eq,
            expr.clone(),
        ));
        return Ok(());
    };

    match items.as_slice() {
        [value] => {
            clauses.push(Clause::compare(
                Connector::And,
                field,
                Operator::Eq,
                value.clone(),
            ));
            Ok(())
        }

        [op, value] => push_operator_entry(clauses, Connector::And, field, op, value),

        [conn, op, value] => {
            let connector = parse_connector(conn)?;
            push_operator_entry(clauses, connector, field, op, value)
        }

        [conn, field_override, op, value] => {
            let connector = parse_connector(conn)?;
            let field = text_token(field_override)?;
            push_operator_entry(clauses, connector, field, op, value)
        }

        [] => Err(ResolveError::InvalidArgument {
            context: field.to_string(),
            expected: "a non-empty expression list",
        }),

        _ => Err(ResolveError::InvalidArgument {
            context: field.to_string(),
            expected: "an expression list of one to four elements",
        }),
    }
}

fn push_operator_entry(
    clauses: &mut Vec<Clause>,
    connector: Connector,
    field: &str,
    op: &Value,
    value: &Value,
) -> Result<(), ResolveError> {
    let token = text_token(op)?;

    if let Some(composite) = Composite::from_token(token) {
        // The or/not semantics encoded in the statement name win over the
        // implicit `and`; an explicit `or` connector is never downgraded.
        let connector = if composite.or || connector == Connector::Or {
            Connector::Or
        } else {
            Connector::And
        };

        let clause = if composite.range {
            let (lower, upper) = range_bounds(field, value)?;
            Clause::range(connector, field, lower, upper, composite.negated)
        } else {
            let values = value
                .as_list()
                .ok_or_else(|| ResolveError::InvalidArgument {
                    context: field.to_string(),
                    expected: "a list of candidate values",
                })?;
            Clause::membership(connector, field, values.to_vec(), composite.negated)
        };

        clauses.push(clause);
        return Ok(());
    }

    let op = Operator::from_token(token).ok_or_else(|| ResolveError::UnsupportedStatement {
        token: token.to_string(),
    })?;

    clauses.push(Clause::compare(connector, field, op, value.clone()));
    Ok(())
}

fn parse_connector(value: &Value) -> Result<Connector, ResolveError> {
    let token = text_token(value)?;

    Connector::from_token(token).ok_or_else(|| ResolveError::UnsupportedStatement {
        token: token.to_string(),
    })
}

fn text_token(value: &Value) -> Result<&str, ResolveError> {
    value
        .as_text()
        .ok_or_else(|| ResolveError::UnsupportedStatement {
            token: format!("{value:?}"),
        })
}

fn range_bounds(field: &str, value: &Value) -> Result<(Value, Value), ResolveError> {
    match value.as_list() {
        Some([lower, upper]) => Ok((lower.clone(), upper.clone())),
        _ => Err(ResolveError::InvalidArgument {
            context: field.to_string(),
            expected: "a two-element list of range bounds",
        }),
    }
}

///
/// Composite
///
/// Statement tokens that fold connector and negation into one name.
///

#[derive(Clone, Copy, Debug)]
struct Composite {
    or: bool,
    negated: bool,
    range: bool,
}

impl Composite {
    fn from_token(token: &str) -> Option<Self> {
        let (or, negated, range) = match token {
            "in" => (false, false, false),
            "orIn" => (true, false, false),
            "notIn" => (false, true, false),
            "orNotIn" => (true, true, false),
            "between" => (false, false, true),
            "orBetween" => (true, false, true),
            "notBetween" => (false, true, true),
            "orNotBetween" => (true, true, true),
            _ => return None,
        };

        Some(Self { or, negated, range })
    }
}
