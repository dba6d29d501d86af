//! Errors raised while building a catalog or parsing a category name.
//!
//! All variants but `UnknownCategory` are configuration errors: the catalog is
//! never handed out in a partially built state. `UnknownCategory` comes from
//! parsing a category name. Lookups that find nothing return `None`, not an error.

use thiserror::Error;

use crate::emotion::EmotionCategory;

/// Failure to build an [`EmotionCatalog`](crate::catalog::EmotionCatalog), or to
/// parse an [`EmotionCategory`] name.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The table does not list exactly eight categories.
    #[error("base table must list exactly {expected} categories, found {found}")]
    CategoryCount {
        /// Required number of categories.
        expected: usize,
        /// Number of entries in the supplied table.
        found: usize,
    },

    /// A category appears more than once.
    #[error("category `{0}` appears more than once in the base table")]
    DuplicateCategory(EmotionCategory),

    /// A variant has an empty or whitespace-only name.
    #[error("variant {index} of category `{category}` has an empty name")]
    EmptyName {
        /// Category holding the variant.
        category: EmotionCategory,
        /// Position of the variant within its category.
        index: usize,
    },

    /// Two variants share a name after case folding.
    #[error("variant name `{0}` is not unique")]
    DuplicateName(String),

    /// A base valence or arousal is non-finite or outside its range.
    #[error("variant `{name}` has {axis} {value} outside [{min}, {max}]")]
    ValueOutOfRange {
        /// Variant name.
        name: String,
        /// `"valence"` or `"arousal"`.
        axis: &'static str,
        /// Offending value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A similarity threshold is non-finite or not strictly positive.
    #[error("{name} must be finite and > 0, got {value}")]
    InvalidThreshold {
        /// Config field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A category name did not parse.
    #[error("unknown emotion category `{0}`")]
    UnknownCategory(String),
}
