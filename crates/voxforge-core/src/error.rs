//! Error types for model and color handling.

use thiserror::Error;

use crate::voxel::BoxId;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A color string could not be parsed.
    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor {
        /// The offending input.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A box carries a color that cannot be resolved.
    #[error("Box {box_id} has an unresolvable {field}: {source}")]
    BoxColor {
        /// Id of the offending box.
        box_id: BoxId,
        /// Which field failed (`customColor`, `primaryColor`, ...).
        field: &'static str,
        /// Underlying parse failure.
        #[source]
        source: Box<Error>,
    },

    /// A theme color passed by the caller could not be parsed.
    #[error("Invalid {field}: {source}")]
    ThemeColor {
        /// `primaryColor`, `secondaryColor` or `glowColor`.
        field: &'static str,
        /// Underlying parse failure.
        #[source]
        source: Box<Error>,
    },

    /// Box geometry violates the model invariants.
    #[error("Degenerate box {box_id}: {reason}")]
    DegenerateBox {
        /// Id of the offending box.
        box_id: BoxId,
        /// What was wrong with it.
        reason: String,
    },

    /// Model-level invariant violated (duplicate ids, missing groups, ...).
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Bake options out of range.
    #[error("Invalid bake options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidColor`].
    pub fn invalid_color(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
