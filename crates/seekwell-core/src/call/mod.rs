//! Convention-encoded call names: tokenization, implicit-connector
//! reconciliation, and positional argument binding. Names in the style of
//! `findAllByTypeAndFlagOrderByNameLimit` resolve here into a
//! [`FilterSpec`].

mod binder;
mod normalize;
mod scanner;

#[cfg(test)]
mod tests;

pub use scanner::{Action, CallName, Keyword, Segment};

use crate::{
    config::ResolverConfig,
    error::ResolveError,
    spec::{FilterSpec, Operator},
    value::Value,
};

///
/// ResolvedCall
///
/// Outcome of resolving one call name against its arguments: the promised
/// result shape plus the canonical spec to execute.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCall {
    pub action: Action,
    pub spec: FilterSpec,
}

/// Resolve a call name and its positional arguments into a spec.
///
/// Comparison clauses use equality; [`resolve_with_operator`] admits an
/// explicit default operator.
pub fn resolve(
    name: &str,
    args: Vec<Value>,
    config: &ResolverConfig,
) -> Result<ResolvedCall, ResolveError> {
    resolve_with_operator(name, args, config, Operator::Eq)
}

/// Resolve with an explicit default comparison operator.
pub fn resolve_with_operator(
    name: &str,
    args: Vec<Value>,
    config: &ResolverConfig,
    default_op: Operator,
) -> Result<ResolvedCall, ResolveError> {
    let call = CallName::parse(name)?;
    let spec = binder::bind_with_operator(&call, args, config, default_op)?;

    if config.debug {
        log::debug!("resolved '{name}' to {spec:?}");
    }

    Ok(ResolvedCall {
        action: call.action(),
        spec,
    })
}
