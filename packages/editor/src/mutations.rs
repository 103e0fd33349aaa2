//! # Document Mutations
//!
//! High-level semantic operations on a block document.
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Lands immediately after `after_id`, or at the end when the anchor is
//!   absent or already deleted
//! - Duplicate ids are rejected at validation
//!
//! ### UpdateContent
//! - Atomic payload replacement (not a diff); the block keeps its id and
//!   position, the payload may change the block's type
//! - Unknown id is a no-op
//!
//! ### Remove / Move
//! - Unknown id is a no-op; a boundary move is a no-op
//!
//! The no-op rule exists because editing UIs race with deletions; silently
//! dropping a stale reference is the intended behavior, not an error path.

use lorebase_model::{Block, BlockContent};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ops::{self, Direction};

/// Semantic, serializable edit operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Insert a new block after `after_id` (append when absent).
    Insert {
        block: Block,
        after_id: Option<String>,
    },

    /// Replace a block's payload (atomic, whole-payload).
    UpdateContent { id: String, content: BlockContent },

    /// Remove a block.
    Remove { id: String },

    /// Swap a block with its neighbor.
    Move { id: String, direction: Direction },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("duplicate block id: {0}")]
    DuplicateId(String),

    #[error("empty block id")]
    EmptyId,
}

impl Mutation {
    /// Apply to a sequence, producing the next sequence.
    ///
    /// Validates first; the input is never mutated.
    pub fn apply(&self, blocks: &[Block]) -> Result<Vec<Block>, MutationError> {
        self.validate(blocks)?;

        let next = match self {
            Mutation::Insert { block, after_id } => {
                debug!(id = %block.id, kind = %block.kind(), "insert block");
                ops::insert_block(blocks, block.clone(), after_id.as_deref())
            }

            Mutation::UpdateContent { id, content } => {
                debug!(%id, "update block content");
                ops::update_block_content(blocks, id, content.clone())
            }

            Mutation::Remove { id } => {
                debug!(%id, "remove block");
                ops::delete_block(blocks, id)
            }

            Mutation::Move { id, direction } => {
                debug!(%id, ?direction, "move block");
                ops::move_block(blocks, id, *direction)
            }
        };

        Ok(next)
    }

    /// Validate without applying.
    ///
    /// Only structural problems fail; targeting an unknown id is legal and
    /// applies as a no-op.
    pub fn validate(&self, blocks: &[Block]) -> Result<(), MutationError> {
        match self {
            Mutation::Insert { block, .. } => {
                if block.id.is_empty() {
                    return Err(MutationError::EmptyId);
                }
                if blocks.iter().any(|b| b.id == block.id) {
                    return Err(MutationError::DuplicateId(block.id.clone()));
                }
                Ok(())
            }

            Mutation::UpdateContent { id, .. }
            | Mutation::Remove { id }
            | Mutation::Move { id, .. } => {
                if id.is_empty() {
                    return Err(MutationError::EmptyId);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorebase_model::BlockKind;

    fn paragraph(id: &str) -> Block {
        Block::new(id, BlockContent::default_for(BlockKind::Paragraph))
    }

    #[test]
    fn test_mutation_serialization_round_trip() {
        let mutation = Mutation::UpdateContent {
            id: "b-1".to_string(),
            content: BlockContent::Paragraph {
                text: "Hello World".to_string(),
            },
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let back: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, back);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let blocks = vec![paragraph("b-1")];
        let mutation = Mutation::Insert {
            block: paragraph("b-1"),
            after_id: None,
        };

        assert_eq!(
            mutation.validate(&blocks),
            Err(MutationError::DuplicateId("b-1".to_string()))
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        let mutation = Mutation::Remove { id: String::new() };
        assert_eq!(mutation.validate(&[]), Err(MutationError::EmptyId));
    }

    #[test]
    fn test_remove_unknown_id_applies_as_noop() {
        let blocks = vec![paragraph("b-1")];
        let next = Mutation::Remove {
            id: "gone".to_string(),
        }
        .apply(&blocks)
        .unwrap();

        assert_eq!(next, blocks);
    }
}
