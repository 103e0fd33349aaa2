//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),
}
