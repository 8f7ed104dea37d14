//! Order-by expressions supplied to the typed finder operations: `field`
//! or `field:direction`, singly or in lists. Call names carry their own
//! ordering keywords and never pass through here.

use crate::{error::ResolveError, spec::OrderDirection};

/// Parse a list of order-by expressions into ordering entries.
///
/// Whitespace around fields and directions is trimmed; empty expressions
/// are ignored. A missing direction defaults to ascending.
pub fn parse_sort<'a, I>(exprs: I) -> Result<Vec<(String, OrderDirection)>, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order = Vec::new();

    for expr in exprs {
        if let Some(entry) = parse_sort_expr(expr)? {
            order.push(entry);
        }
    }

    Ok(order)
}

/// Parse one order-by expression; `None` for blank input.
pub fn parse_sort_expr(expr: &str) -> Result<Option<(String, OrderDirection)>, ResolveError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Ok(None);
    }

    let (field, direction) = match expr.split_once(':') {
        Some((field, direction)) => {
            let direction = direction.trim();
            let direction = OrderDirection::from_token(direction).ok_or_else(|| {
                ResolveError::InvalidOrderDirection {
                    direction: direction.to_string(),
                }
            })?;
            (field.trim(), direction)
        }
        None => (expr, OrderDirection::Asc),
    };

    Ok(Some((field.to_string(), direction)))
}
