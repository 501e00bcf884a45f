//! Error types for item editing, spinning and configuration.

use crate::items::MIN_ITEMS;

/// Rejections produced by item edits and spin commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    #[error("Item label must not be empty")]
    EmptyLabel,

    #[error("The wheel needs at least {min} items")]
    TooFewItems { min: usize },

    #[error("Item index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("There are no items to spin")]
    NoItems,

    #[error("A spin is already in progress")]
    SpinInProgress,

    #[error("Reset the wheel before spinning again")]
    ResetRequired,
}

impl WheelError {
    /// Error for a removal that would shrink the list below the minimum.
    pub const fn too_few() -> Self {
        Self::TooFewItems { min: MIN_ITEMS }
    }
}

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Spin duration must be greater than zero")]
    ZeroDuration,

    #[error("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
