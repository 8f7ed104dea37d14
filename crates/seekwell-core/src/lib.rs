//! Core resolver for seekwell: call-name scanning, positional argument
//! binding, the structured where-clause grammar, and compilation of the
//! resulting filter spec against an abstract query backend.
#![warn(unreachable_pub)]

pub mod call;
pub mod compile;
pub mod config;
pub mod error;
pub mod filter;
pub mod sort;
pub mod spec;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No parsers, compilers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        call::{Action, CallName, Keyword, ResolvedCall, Segment},
        compile::QueryBackend,
        config::ResolverConfig,
        error::ResolveError,
        filter::Where,
        spec::{Clause, ClauseKind, Connector, FilterSpec, Operator, OrderDirection},
        value::Value,
    };
}
