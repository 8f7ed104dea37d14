//! Repository front over the resolver: typed finder operations and the
//! generic dynamic entry point. Every operation builds one fresh spec,
//! performs one backend round-trip, and returns the backend's native
//! result untouched.

use crate::error::Error;
use seekwell_core::{
    call::{self, Action},
    compile::{self, QueryBackend},
    config::ResolverConfig,
    filter::{Where, parse_where},
    sort::parse_sort,
    spec::{Clause, Connector, FilterSpec, Operator},
    value::Value,
};


///
/// QuerySource
///
/// Hands out a fresh query builder per logical request, so no builder
/// state ever leaks between operations.
///

pub trait QuerySource {
    type Query: QueryBackend;

    fn query(&self) -> Self::Query;
}

/// Single-record result of a source's backend.
pub type OneOf<S> = <<S as QuerySource>::Query as QueryBackend>::One;

/// Collection result of a source's backend.
pub type ManyOf<S> = <<S as QuerySource>::Query as QueryBackend>::Many;

/// Paginated result of a source's backend.
pub type PageOf<S> = <<S as QuerySource>::Query as QueryBackend>::Page;

///
/// CallOutcome
///
/// Result of the dynamic entry point: the shape is decided by the call
/// name's action and its pagination marker.
///

pub enum CallOutcome<S: QuerySource> {
    One(OneOf<S>),
    Many(ManyOf<S>),
    Page(PageOf<S>),
}

impl<S: QuerySource> std::fmt::Debug for CallOutcome<S>
where
    OneOf<S>: std::fmt::Debug,
    ManyOf<S>: std::fmt::Debug,
    PageOf<S>: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One(v) => f.debug_tuple("One").field(v).finish(),
            Self::Many(v) => f.debug_tuple("Many").field(v).finish(),
            Self::Page(v) => f.debug_tuple("Page").field(v).finish(),
        }
    }
}

///
/// Repository
///

pub struct Repository<S: QuerySource> {
    source: S,
    config: ResolverConfig,
}

impl<S: QuerySource> Repository<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, ResolverConfig::default())
    }

    #[must_use]
    pub const fn with_config(source: S, config: ResolverConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    ///
    /// SINGLE-RESULT FINDERS
    ///

    /// Find the first record where `field op value`.
    pub fn find_by_field(
        &self,
        field: &str,
        op: Operator,
        value: impl Into<Value>,
        with: &[&str],
    ) -> OneOf<S> {
        let mut spec = FilterSpec::new().clause(Clause::compare(
            Connector::And,
            field,
            op,
            value.into(),
        ));
        spec.eager_load = relations(with);

        self.log_spec("find_by_field", &spec);
        compile::one(self.source.query(), &spec)
    }

    /// Find the first record matching a structured filter.
    pub fn find_where(&self, filter: &Where, with: &[&str]) -> Result<OneOf<S>, Error> {
        let mut spec = FilterSpec::new();
        spec.clauses = parse_where(filter)?;
        spec.eager_load = relations(with);

        self.log_spec("find_where", &spec);
        Ok(compile::one(self.source.query(), &spec))
    }

    ///
    /// COLLECTION FINDERS
    ///

    /// Fetch all records, optionally ordered, eager-loaded, and limited.
    pub fn find_all(
        &self,
        order: &[&str],
        with: &[&str],
        limit: Option<u32>,
    ) -> Result<ManyOf<S>, Error> {
        let spec = self.all_spec("find_all", Vec::new(), order, with, limit)?;

        Ok(compile::all(self.source.query(), &spec))
    }

    /// Fetch all records where `field op value`.
    pub fn find_all_by_field(
        &self,
        field: &str,
        op: Operator,
        value: impl Into<Value>,
        order: &[&str],
        with: &[&str],
        limit: Option<u32>,
    ) -> Result<ManyOf<S>, Error> {
        let clauses = vec![Clause::compare(Connector::And, field, op, value.into())];
        let spec = self.all_spec("find_all_by_field", clauses, order, with, limit)?;

        Ok(compile::all(self.source.query(), &spec))
    }

    /// Fetch all records matching a structured filter.
    pub fn find_all_where(
        &self,
        filter: &Where,
        order: &[&str],
        with: &[&str],
        limit: Option<u32>,
    ) -> Result<ManyOf<S>, Error> {
        let spec = self.all_spec("find_all_where", parse_where(filter)?, order, with, limit)?;

        Ok(compile::all(self.source.query(), &spec))
    }

    ///
    /// PAGINATED FINDERS
    ///

    /// Fetch one page of all records.
    pub fn paginate(
        &self,
        per_page: Option<u32>,
        order: &[&str],
        with: &[&str],
    ) -> Result<PageOf<S>, Error> {
        let spec = self.all_spec("paginate", Vec::new(), order, with, None)?;

        Ok(compile::page(self.source.query(), &spec, self.per_page(per_page)))
    }

    /// Fetch one page of records where `field op value`.
    pub fn find_all_by_field_paginated(
        &self,
        field: &str,
        op: Operator,
        value: impl Into<Value>,
        per_page: Option<u32>,
        order: &[&str],
        with: &[&str],
    ) -> Result<PageOf<S>, Error> {
        let clauses = vec![Clause::compare(Connector::And, field, op, value.into())];
        let spec = self.all_spec("find_all_by_field_paginated", clauses, order, with, None)?;

        Ok(compile::page(self.source.query(), &spec, self.per_page(per_page)))
    }

    /// Fetch one page of records matching a structured filter.
    pub fn find_all_where_paginated(
        &self,
        filter: &Where,
        per_page: Option<u32>,
        order: &[&str],
        with: &[&str],
    ) -> Result<PageOf<S>, Error> {
        let spec = self.all_spec("find_all_where_paginated", parse_where(filter)?, order, with, None)?;

        Ok(compile::page(self.source.query(), &spec, self.per_page(per_page)))
    }

    ///
    /// DYNAMIC ENTRY POINT
    ///

    /// Resolve a convention-encoded call name against positional arguments
    /// and execute it. The result shape follows the name: `findBy` fetches
    /// one record, `findAllBy` a collection, and a `Paginated` marker a
    /// page envelope.
    pub fn call(&self, name: &str, args: Vec<Value>) -> Result<CallOutcome<S>, Error> {
        let resolved = call::resolve(name, args, &self.config)?;

        let outcome = match resolved.action {
            Action::FindOne => CallOutcome::One(compile::one(self.source.query(), &resolved.spec)),
            Action::FindAll => match resolved.spec.page {
                Some(per_page) => {
                    CallOutcome::Page(compile::page(self.source.query(), &resolved.spec, per_page))
                }
                None => CallOutcome::Many(compile::all(self.source.query(), &resolved.spec)),
            },
        };

        Ok(outcome)
    }

    ///
    /// Helpers
    ///

    fn all_spec(
        &self,
        op: &str,
        clauses: Vec<Clause>,
        order: &[&str],
        with: &[&str],
        limit: Option<u32>,
    ) -> Result<FilterSpec, Error> {
        let mut spec = FilterSpec::new();
        spec.clauses = clauses;
        spec.order = parse_sort(order.iter().copied())?;
        spec.eager_load = relations(with);
        spec.limit = limit;

        self.log_spec(op, &spec);
        Ok(spec)
    }

    fn per_page(&self, per_page: Option<u32>) -> u32 {
        per_page.unwrap_or(self.config.per_page)
    }

    fn log_spec(&self, op: &str, spec: &FilterSpec) {
        if self.config.debug {
            log::debug!("{op}: {spec:?}");
        }
    }
}

fn relations(with: &[&str]) -> Option<Vec<String>> {
    if with.is_empty() {
        None
    } else {
        Some(with.iter().map(ToString::to_string).collect())
    }
}
