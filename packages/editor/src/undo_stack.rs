//! # Undo/Redo Stack
//!
//! Tracks editing history and enables undo/redo over a [`Document`].
//!
//! ## Design
//!
//! The document model is whole-sequence replacement, so history is kept as
//! sequence snapshots: before a mutation applies, the current sequence is
//! pushed; undo swaps it back in and parks the replaced sequence on the redo
//! stack. A new mutation clears the redo stack.
//!
//! ## Example
//!
//! ```rust
//! use lorebase_editor::{Document, Mutation, UndoStack};
//! use lorebase_model::{Block, BlockContent, BlockKind};
//!
//! let mut doc = Document::new();
//! let mut stack = UndoStack::new();
//!
//! let insert = Mutation::Insert {
//!     block: Block::new("b-1", BlockContent::default_for(BlockKind::Paragraph)),
//!     after_id: None,
//! };
//! stack.apply(insert, &mut doc).unwrap();
//!
//! assert!(stack.undo(&mut doc));
//! assert!(doc.blocks().is_empty());
//! assert!(stack.redo(&mut doc));
//! assert_eq!(doc.blocks().len(), 1);
//! ```

use lorebase_model::Block;

use crate::{Document, EditorError, Mutation};

/// Bounded undo/redo history of block-sequence snapshots.
#[derive(Debug, Default)]
pub struct UndoStack {
    /// Pre-mutation snapshots, most recent last.
    undo_stack: Vec<Vec<Block>>,

    /// Undone snapshots, most recent last.
    redo_stack: Vec<Vec<Block>>,

    /// Maximum undo levels (0 = unlimited).
    max_levels: usize,
}

impl UndoStack {
    /// Default depth of 100 levels.
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Apply a mutation to the document, recording the prior sequence.
    ///
    /// A failed mutation records nothing.
    pub fn apply(&mut self, mutation: Mutation, doc: &mut Document) -> Result<(), EditorError> {
        let snapshot = doc.blocks().to_vec();
        doc.apply(mutation)?;

        self.undo_stack.push(snapshot);
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // A new edit invalidates the redo future
        self.redo_stack.clear();
        Ok(())
    }

    /// Undo the most recent mutation. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.redo_stack.push(doc.blocks().to_vec());
                doc.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone mutation. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(doc.blocks().to_vec());
                doc.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
