use convert_case::{Case, Casing};

/// Convert a concatenated-capitalized field reference to the backend's
/// canonical naming convention (`TypeId` -> `type_id`).
#[must_use]
pub(crate) fn normalize_field(raw: &str) -> String {
    raw.to_case(Case::Snake)
}

/// Inverse rendering used when a segment list is written back out as a
/// call name (`type_id` -> `TypeId`).
#[must_use]
pub(crate) fn render_field(canonical: &str) -> String {
    canonical.to_case(Case::Pascal)
}
