//! Compilation of a finished [`FilterSpec`] against an abstract query
//! backend. The application order is fixed and the spec is never mutated;
//! a spec that reaches this module has already passed every resolution
//! check.

use crate::{
    spec::{Clause, ClauseKind, Connector, FilterSpec, Operator, OrderDirection},
    value::Value,
};


///
/// QueryBackend
///
/// Abstract query-building capability the compiler drives. Builder calls
/// consume and return the builder; the three `fetch` terminals return the
/// backend's native result shapes unmodified. The compiler never
/// interprets emptiness — signalling "not found" is the caller's concern.
///

pub trait QueryBackend: Sized {
    /// Single-record result.
    type One;
    /// Ordered collection result.
    type Many;
    /// Paginated envelope with total-count metadata.
    type Page;

    #[must_use]
    fn with_relations(self, relations: &[String]) -> Self;

    #[must_use]
    fn where_(self, field: &str, op: Operator, value: &Value) -> Self;

    #[must_use]
    fn or_where(self, field: &str, op: Operator, value: &Value) -> Self;

    #[must_use]
    fn where_in(self, field: &str, values: &[Value], connector: Connector, negated: bool) -> Self;

    #[must_use]
    fn where_between(
        self,
        field: &str,
        lower: &Value,
        upper: &Value,
        connector: Connector,
        negated: bool,
    ) -> Self;

    #[must_use]
    fn order_by(self, field: &str, direction: OrderDirection) -> Self;

    #[must_use]
    fn limit(self, n: u32) -> Self;

    fn fetch_one(self) -> Self::One;

    fn fetch_all(self) -> Self::Many;

    fn fetch_page(self, page_size: u32) -> Self::Page;
}

/// Apply a spec to a backend builder in the fixed order: eager-load
/// relations, clauses in declaration order, ordering entries, then limit.
#[must_use]
pub fn apply<B: QueryBackend>(backend: B, spec: &FilterSpec) -> B {
    let mut query = backend;

    if let Some(relations) = &spec.eager_load {
        query = query.with_relations(relations);
    }

    for clause in &spec.clauses {
        query = apply_clause(query, clause);
    }

    for (field, direction) in &spec.order {
        query = query.order_by(field, *direction);
    }

    if let Some(limit) = spec.limit {
        query = query.limit(limit);
    }

    query
}

/// Apply a spec and fetch a single record.
pub fn one<B: QueryBackend>(backend: B, spec: &FilterSpec) -> B::One {
    apply(backend, spec).fetch_one()
}

/// Apply a spec and fetch the full collection.
pub fn all<B: QueryBackend>(backend: B, spec: &FilterSpec) -> B::Many {
    apply(backend, spec).fetch_all()
}

/// Apply a spec and fetch one page of the given size.
pub fn page<B: QueryBackend>(backend: B, spec: &FilterSpec, page_size: u32) -> B::Page {
    apply(backend, spec).fetch_page(page_size)
}

fn apply_clause<B: QueryBackend>(query: B, clause: &Clause) -> B {
    match &clause.kind {
        ClauseKind::Compare { field, op, value } => match clause.connector {
            Connector::And => query.where_(field, *op, value),
            Connector::Or => query.or_where(field, *op, value),
        },

        ClauseKind::Membership {
            field,
            values,
            negated,
        } => query.where_in(field, values, clause.connector, *negated),

        ClauseKind::Range {
            field,
            lower,
            upper,
            negated,
        } => query.where_between(field, lower, upper, clause.connector, *negated),
    }
}
