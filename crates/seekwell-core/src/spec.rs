use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// FilterSpec
///
/// Canonical, backend-independent description of one resolved query. Both
/// resolution paths (call names and structured filters) converge on this
/// representation before anything touches a backend.
///
/// Clause order is load-bearing: connector semantics are left-to-right and
/// non-commutative once `and` and `or` are mixed.
///

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FilterSpec {
    pub clauses: Vec<Clause>,
    pub order: Vec<(String, OrderDirection)>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub eager_load: Option<Vec<String>>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
            && self.order.is_empty()
            && self.limit.is_none()
            && self.page.is_none()
            && self.eager_load.is_none()
    }

    /// Append a clause, preserving declaration order.
    #[must_use]
    pub fn clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Append an ordering entry.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order.push((field.into(), direction));
        self
    }
}

///
/// Clause
///
/// One filter predicate. The field is always in canonical form before a
/// clause is finalized.
///

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Clause {
    pub connector: Connector,
    pub kind: ClauseKind,
}

impl Clause {
    #[must_use]
    pub fn compare(
        connector: Connector,
        field: impl Into<String>,
        op: Operator,
        value: Value,
    ) -> Self {
        Self {
            connector,
            kind: ClauseKind::Compare {
                field: field.into(),
                op,
                value,
            },
        }
    }

    #[must_use]
    pub fn membership(
        connector: Connector,
        field: impl Into<String>,
        values: Vec<Value>,
        negated: bool,
    ) -> Self {
        Self {
            connector,
            kind: ClauseKind::Membership {
                field: field.into(),
                values,
                negated,
            },
        }
    }

    #[must_use]
    pub fn range(
        connector: Connector,
        field: impl Into<String>,
        lower: Value,
        upper: Value,
        negated: bool,
    ) -> Self {
        Self {
            connector,
            kind: ClauseKind::Range {
                field: field.into(),
                lower,
                upper,
                negated,
            },
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        match &self.kind {
            ClauseKind::Compare { field, .. }
            | ClauseKind::Membership { field, .. }
            | ClauseKind::Range { field, .. } => field,
        }
    }
}

///
/// ClauseKind
///

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum ClauseKind {
    /// Equality or ordered comparison against one value.
    Compare {
        field: String,
        op: Operator,
        value: Value,
    },

    /// Set membership against a list of candidate values.
    Membership {
        field: String,
        values: Vec<Value>,
        negated: bool,
    },

    /// Inclusive range between two bounds.
    Range {
        field: String,
        lower: Value,
        upper: Value,
        negated: bool,
    },
}

///
/// Connector
///
/// Boolean relationship joining a clause to the clauses before it.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Deserialize, Serialize)]
pub enum Connector {
    #[display("and")]
    And,
    #[display("or")]
    Or,
}

impl Connector {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }
}

///
/// Operator
///
/// Comparison operator of a compare clause, parsed from the structured
/// filter notation.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Deserialize, Serialize)]
pub enum Operator {
    #[display("=")]
    Eq,
    #[display("!=")]
    Ne,
    #[display("<")]
    Lt,
    #[display("<=")]
    Lte,
    #[display(">")]
    Gt,
    #[display(">=")]
    Gte,
    #[display("like")]
    Like,
}

impl Operator {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Eq),
            "!=" | "<>" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Lte),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Gte),
            "like" => Some(Self::Like),
            _ => None,
        }
    }
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Deserialize, Serialize)]
pub enum OrderDirection {
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}
