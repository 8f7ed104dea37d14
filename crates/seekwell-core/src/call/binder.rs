use crate::{
    call::scanner::{CallName, Keyword},
    config::ResolverConfig,
    error::ResolveError,
    spec::{Clause, Connector, FilterSpec, Operator, OrderDirection},
    value::Value,
};
use std::collections::VecDeque;

/// Bind positional arguments against a tokenized call name, producing a
/// filter spec.
///
/// Keywords are paired with field references positionally: the Nth
/// field-taking keyword (after implicit-connector reconciliation) binds the
/// Nth field. Positional arguments are consumed strictly left-to-right and
/// never re-ordered; trailing markers take an argument only when one
/// remains.
pub(crate) fn bind_with_operator(
    call: &CallName,
    args: Vec<Value>,
    config: &ResolverConfig,
    default_op: Operator,
) -> Result<FilterSpec, ResolveError> {
    let fields = call.fields();
    let mut args = VecDeque::from(args);
    let mut spec = FilterSpec::new();
    let mut field_cursor = 0;

    for keyword in call.reconciled_keywords() {
        let field = if keyword.takes_field() {
            let field = *fields.get(field_cursor).ok_or_else(|| {
                ResolveError::InvalidCallName {
                    name: call.name().to_string(),
                }
            })?;
            field_cursor += 1;
            Some(field)
        } else {
            None
        };

        match keyword {
            Keyword::And | Keyword::Or => {
                let field = field.expect("connectives take a field");
                let value = take_required(&mut args, field)?;

                spec.clauses
                    .push(Clause::compare(connector(keyword), field, default_op, value));
            }

            Keyword::In | Keyword::OrIn | Keyword::NotIn | Keyword::OrNotIn => {
                let field = field.expect("connectives take a field");
                let values = match take_required(&mut args, field)? {
                    Value::List(values) => values,
                    _ => {
                        return Err(ResolveError::InvalidArgument {
                            context: field.to_string(),
                            expected: "a list of candidate values",
                        });
                    }
                };

                spec.clauses.push(Clause::membership(
                    connector(keyword),
                    field,
                    values,
                    negated(keyword),
                ));
            }

            Keyword::Between | Keyword::OrBetween | Keyword::NotBetween | Keyword::OrNotBetween => {
                let field = field.expect("connectives take a field");
                let mut bounds = match take_required(&mut args, field)? {
                    Value::List(bounds) if bounds.len() == 2 => bounds,
                    _ => {
                        return Err(ResolveError::InvalidArgument {
                            context: field.to_string(),
                            expected: "a two-element list of range bounds",
                        });
                    }
                };

                let upper = bounds.pop().expect("bounds hold two values");
                let lower = bounds.pop().expect("bounds hold two values");
                spec.clauses.push(Clause::range(
                    connector(keyword),
                    field,
                    lower,
                    upper,
                    negated(keyword),
                ));
            }

            Keyword::OrderBy => {
                let field = field.expect("ordering takes a field");
                spec.order.push((field.to_string(), OrderDirection::Asc));
            }

            Keyword::OrderByDesc => {
                let field = field.expect("ordering takes a field");
                spec.order.push((field.to_string(), OrderDirection::Desc));
            }

            Keyword::Limit => {
                spec.limit = Some(take_count(&mut args, "limit", config.limit)?);
            }

            Keyword::Paginated => {
                spec.page = Some(take_count(&mut args, "per_page", config.per_page)?);
            }

            Keyword::With => {
                spec.eager_load = match args.pop_front() {
                    Some(value) => Some(relation_list(value)?),
                    None => config.default_relations(),
                };
            }
        }
    }

    Ok(spec)
}

fn take_required(args: &mut VecDeque<Value>, field: &str) -> Result<Value, ResolveError> {
    args.pop_front().ok_or_else(|| ResolveError::MissingArgument {
        field: field.to_string(),
    })
}

/// Optional trailing count: consume the next argument when one remains,
/// otherwise substitute the configured default.
fn take_count(
    args: &mut VecDeque<Value>,
    context: &str,
    default: u32,
) -> Result<u32, ResolveError> {
    match args.pop_front() {
        Some(value) => value.to_count().ok_or_else(|| ResolveError::InvalidArgument {
            context: context.to_string(),
            expected: "a positive integer",
        }),
        None => Ok(default),
    }
}

fn relation_list(value: Value) -> Result<Vec<String>, ResolveError> {
    let items = match value {
        Value::Text(name) => return Ok(vec![name]),
        Value::List(items) => items,
        _ => {
            return Err(ResolveError::InvalidArgument {
                context: "with".to_string(),
                expected: "relation names as text values",
            });
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Text(name) => Ok(name),
            _ => Err(ResolveError::InvalidArgument {
                context: "with".to_string(),
                expected: "relation names as text values",
            }),
        })
        .collect()
}

const fn connector(keyword: Keyword) -> Connector {
    match keyword {
        Keyword::Or
        | Keyword::OrIn
        | Keyword::OrNotIn
        | Keyword::OrBetween
        | Keyword::OrNotBetween => Connector::Or,
        _ => Connector::And,
    }
}

const fn negated(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::NotIn | Keyword::OrNotIn | Keyword::NotBetween | Keyword::OrNotBetween
    )
}
