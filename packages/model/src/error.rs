//! Error types for the model crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A block type tag outside the closed set. Never silently defaulted.
    #[error("unsupported block type: {0}")]
    UnsupportedBlockType(String),
}
