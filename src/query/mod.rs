//! The in-memory query engine: filter specification, the pure
//! filter/search/sort pipeline, and derived facet lists.

pub mod engine;
pub mod facets;
pub mod spec;

pub use engine::{apply, apply_at, compare, matches_at};
pub use facets::{unique_categories, unique_employment_types, unique_locations, ALL_CATEGORIES};
pub use spec::{FilterSpec, SortKey};
