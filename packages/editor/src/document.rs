//! # Document Handle
//!
//! A [`Document`] owns one document body (its ordered block sequence) and a
//! version counter. The sequence is the entire state: applying a mutation
//! computes a new sequence and swaps it in wholesale.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Save
//!   ↓      ↓      ↓
//! JSON  Mutations JSON
//! ```
//!
//! Persistence of the JSON (and the title/slug/tags metadata wrapping it)
//! belongs to the backend; the handle only parses and emits the block array.

use lorebase_model::Block;
use tracing::debug;

use crate::{EditorError, Mutation};

/// Editable block document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,

    /// Increments on each applied mutation.
    version: u64,
}

impl Document {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing block sequence.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks, version: 0 }
    }

    /// Parse the persisted block-array JSON.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let blocks: Vec<Block> = serde_json::from_str(json)?;
        Ok(Self::from_blocks(blocks))
    }

    /// Serialize the block sequence for the persistence layer.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(&self.blocks)?)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Look up a block by id.
    pub fn find_block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Apply a mutation, replacing the sequence and bumping the version.
    pub fn apply(&mut self, mutation: Mutation) -> Result<u64, EditorError> {
        let next = mutation.apply(&self.blocks)?;
        self.blocks = next;
        self.version += 1;
        debug!(version = self.version, blocks = self.blocks.len(), "mutation applied");
        Ok(self.version)
    }

    /// Replace the whole sequence (used by undo/redo).
    pub(crate) fn restore(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorebase_model::{BlockContent, BlockKind};

    #[test]
    fn test_version_increments_on_apply() {
        let mut doc = Document::new();
        assert_eq!(doc.version(), 0);

        doc.apply(Mutation::Insert {
            block: Block::new("b-1", BlockContent::default_for(BlockKind::Heading)),
            after_id: None,
        })
        .unwrap();

        assert_eq!(doc.version(), 1);
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let blocks = vec![
            Block::new("b-1", BlockContent::default_for(BlockKind::Heading)),
            Block::new(
                "b-2",
                BlockContent::Quote {
                    text: "ship early".to_string(),
                    author: "anon".to_string(),
                },
            ),
        ];

        let doc = Document::from_blocks(blocks.clone());
        let json = doc.to_json().unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back.blocks(), blocks.as_slice());
    }

    #[test]
    fn test_from_json_rejects_bad_payload() {
        let result = Document::from_json(r#"[{"id": "b-1", "type": "nope", "content": {}}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_block() {
        let doc = Document::from_blocks(vec![Block::new(
            "b-1",
            BlockContent::default_for(BlockKind::Code),
        )]);

        assert!(doc.find_block("b-1").is_some());
        assert!(doc.find_block("b-2").is_none());
    }
}
