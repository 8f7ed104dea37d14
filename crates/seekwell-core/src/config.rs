use serde::{Deserialize, Serialize};

///
/// ResolverConfig
///
/// Defaults substituted when a call name's trailing modifiers omit their
/// arguments. Always passed in explicitly; the resolver keeps no ambient
/// state.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Result cap applied when a `Limit` marker carries no argument.
    pub limit: u32,

    /// Page size applied when a `Paginated` marker carries no argument.
    pub per_page: u32,

    /// Relation names eager-loaded when a `With` marker carries no argument.
    pub relations: Vec<String>,

    /// Emit a debug record of every resolved spec before execution.
    pub debug: bool,
}

impl ResolverConfig {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const DEFAULT_PER_PAGE: u32 = 15;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            per_page: Self::DEFAULT_PER_PAGE,
            relations: Vec::new(),
            debug: false,
        }
    }

    /// Default eager-load set, or `None` when no relations are configured.
    #[must_use]
    pub fn default_relations(&self) -> Option<Vec<String>> {
        if self.relations.is_empty() {
            None
        } else {
            Some(self.relations.clone())
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
