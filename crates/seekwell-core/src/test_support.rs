//! Recording fake backend for compiler tests: every builder call is
//! captured in order, and each terminal stamps the execution it closes.

use crate::{
    compile::QueryBackend,
    spec::{Connector, Operator, OrderDirection},
    value::Value,
};

///
/// BuilderCall
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum BuilderCall {
    WithRelations(Vec<String>),
    Where {
        field: String,
        op: Operator,
        value: Value,
        or: bool,
    },
    WhereIn {
        field: String,
        values: Vec<Value>,
        connector: Connector,
        negated: bool,
    },
    WhereBetween {
        field: String,
        lower: Value,
        upper: Value,
        connector: Connector,
        negated: bool,
    },
    OrderBy {
        field: String,
        direction: OrderDirection,
    },
    Limit(u32),
}

///
/// Terminal
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Terminal {
    One,
    All,
    Page(u32),
}

///
/// Execution
///
/// What a recording query saw: the builder calls in application order plus
/// the terminal that closed it.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Execution {
    pub calls: Vec<BuilderCall>,
    pub terminal: Terminal,
}

///
/// RecordingQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RecordingQuery {
    calls: Vec<BuilderCall>,
}

impl RecordingQuery {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(mut self, call: BuilderCall) -> Self {
        self.calls.push(call);
        self
    }

    fn finish(self, terminal: Terminal) -> Execution {
        Execution {
            calls: self.calls,
            terminal,
        }
    }
}

impl QueryBackend for RecordingQuery {
    type One = Execution;
    type Many = Execution;
    type Page = Execution;

    fn with_relations(self, relations: &[String]) -> Self {
        self.push(BuilderCall::WithRelations(relations.to_vec()))
    }

    fn where_(self, field: &str, op: Operator, value: &Value) -> Self {
        self.push(BuilderCall::Where {
            field: field.to_string(),
            op,
            value: value.clone(),
            or: false,
        })
    }

    fn or_where(self, field: &str, op: Operator, value: &Value) -> Self {
        self.push(BuilderCall::Where {
            field: field.to_string(),
            op,
            value: value.clone(),
            or: true,
        })
    }

    fn where_in(self, field: &str, values: &[Value], connector: Connector, negated: bool) -> Self {
        self.push(BuilderCall::WhereIn {
            field: field.to_string(),
            values: values.to_vec(),
            connector,
            negated,
        })
    }

    fn where_between(
        self,
        field: &str,
        lower: &Value,
        upper: &Value,
        connector: Connector,
        negated: bool,
    ) -> Self {
        self.push(BuilderCall::WhereBetween {
            field: field.to_string(),
            lower: lower.clone(),
            upper: upper.clone(),
            connector,
            negated,
        })
    }

    fn order_by(self, field: &str, direction: OrderDirection) -> Self {
        self.push(BuilderCall::OrderBy {
            field: field.to_string(),
            direction,
        })
    }

    fn limit(self, n: u32) -> Self {
        self.push(BuilderCall::Limit(n))
    }

    fn fetch_one(self) -> Execution {
        self.finish(Terminal::One)
    }

    fn fetch_all(self) -> Execution {
        self.finish(Terminal::All)
    }

    fn fetch_page(self, page_size: u32) -> Execution {
        self.finish(Terminal::Page(page_size))
    }
}
