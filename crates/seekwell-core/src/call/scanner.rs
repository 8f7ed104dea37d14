use crate::{
    call::normalize::{normalize_field, render_field},
    error::ResolveError,
};
use serde::{Deserialize, Serialize};

///
/// Action
///
/// Result shape a call name promises: one record or a collection.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Action {
    FindOne,
    FindAll,
}

impl Action {
    const fn token(self) -> &'static str {
        match self {
            Self::FindOne => "findBy",
            Self::FindAll => "findAllBy",
        }
    }

    /// Strip the action prefix off a call name. `findAllBy` is tried
    /// first so `findBy` never claims its longer sibling.
    fn strip(name: &str) -> Option<(Self, &str)> {
        for action in [Self::FindAll, Self::FindOne] {
            if let Some(rest) = name.strip_prefix(action.token()) {
                return Some((action, rest));
            }
        }

        None
    }
}

///
/// Keyword
///
/// Structural keywords of the call-name grammar. Connectives and ordering
/// keywords pair with a field reference; trailing markers do not.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Keyword {
    And,
    Or,
    In,
    OrIn,
    NotIn,
    OrNotIn,
    Between,
    OrBetween,
    NotBetween,
    OrNotBetween,
    OrderBy,
    OrderByDesc,
    Limit,
    Paginated,
    With,
}

impl Keyword {
    /// Scan order: longest/most specific first, so `OrderByDesc` is never
    /// misread as `OrderBy` and `OrNotIn` never as `Or`.
    pub(crate) const SCAN_ORDER: [Self; 15] = [
        Self::OrNotBetween,
        Self::OrderByDesc,
        Self::NotBetween,
        Self::OrBetween,
        Self::Paginated,
        Self::OrderBy,
        Self::OrNotIn,
        Self::Between,
        Self::Limit,
        Self::NotIn,
        Self::OrIn,
        Self::With,
        Self::And,
        Self::Or,
        Self::In,
    ];

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::And => "And",
            Self::Or => "Or",
            Self::In => "In",
            Self::OrIn => "OrIn",
            Self::NotIn => "NotIn",
            Self::OrNotIn => "OrNotIn",
            Self::Between => "Between",
            Self::OrBetween => "OrBetween",
            Self::NotBetween => "NotBetween",
            Self::OrNotBetween => "OrNotBetween",
            Self::OrderBy => "OrderBy",
            Self::OrderByDesc => "OrderByDesc",
            Self::Limit => "Limit",
            Self::Paginated => "Paginated",
            Self::With => "With",
        }
    }

    /// Whether this keyword consumes the next field reference.
    #[must_use]
    pub const fn takes_field(self) -> bool {
        !matches!(self, Self::Limit | Self::Paginated | Self::With)
    }

    fn match_at(rest: &str) -> Option<Self> {
        Self::SCAN_ORDER
            .into_iter()
            .find(|keyword| rest.starts_with(keyword.token()))
    }
}

///
/// Segment
///
/// One tokenized unit of a call name: a canonical field reference or a
/// structural keyword.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Segment {
    Field(String),
    Keyword(Keyword),
}

///
/// CallName
///
/// A tokenized call name: the action plus its segment list, in call-name
/// order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallName {
    name: String,
    action: Action,
    segments: Vec<Segment>,
}

impl CallName {
    /// Tokenize a call name, or fail when the action prefix is missing.
    pub fn parse(name: &str) -> Result<Self, ResolveError> {
        let (action, rest) = Action::strip(name).ok_or_else(|| ResolveError::InvalidCallName {
            name: name.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            action,
            segments: scan(rest),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Field references, in call-name order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Field(field) => Some(field.as_str()),
                Segment::Keyword(_) => None,
            })
            .collect()
    }

    /// Keywords, in call-name order.
    #[must_use]
    pub fn keywords(&self) -> Vec<Keyword> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Keyword(keyword) => Some(*keyword),
                Segment::Field(_) => None,
            })
            .collect()
    }

    /// Keywords with the implicit leading connector reconciled in.
    ///
    /// A bare `findByX` leaves its first field without an explicit
    /// connector; whenever the field count exceeds the count of
    /// field-taking keywords, a leading `And` is assumed. This runs before
    /// the binder pairs keywords with fields, and nowhere else.
    #[must_use]
    pub fn reconciled_keywords(&self) -> Vec<Keyword> {
        let mut keywords = self.keywords();

        let paired = keywords.iter().filter(|kw| kw.takes_field()).count();
        if self.fields().len() > paired {
            keywords.insert(0, Keyword::And);
        }

        keywords
    }

    /// Write the segment list back out as a call name. Fields come back in
    /// capitalized form; the result re-tokenizes to the same segments.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from(self.action.token());

        for segment in &self.segments {
            match segment {
                Segment::Field(field) => out.push_str(&render_field(field)),
                Segment::Keyword(keyword) => out.push_str(keyword.token()),
            }
        }

        out
    }
}

/// Split the post-action remainder into segments. Greedy left-to-right:
/// at every position the longest matching keyword wins; everything between
/// keyword matches is a field span.
fn scan(rest: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut field_start = 0;
    let mut pos = 0;

    while pos < rest.len() {
        if let Some(keyword) = Keyword::match_at(&rest[pos..]) {
            if pos > field_start {
                segments.push(Segment::Field(normalize_field(&rest[field_start..pos])));
            }
            segments.push(Segment::Keyword(keyword));

            pos += keyword.token().len();
            field_start = pos;
        } else {
            pos += rest[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if field_start < rest.len() {
        segments.push(Segment::Field(normalize_field(&rest[field_start..])));
    }

    segments
}
