//! # Lorebase Editor
//!
//! Block-document editing engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ backend: persisted JSON → Vec<Block>        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Pure sequence operations (ops)           │
//! │  - Apply mutations with validation          │
//! │  - Undo/redo via sequence snapshots         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ backend: Vec<Block> → persisted JSON        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The sequence is the state**: a document body is nothing but its
//!    ordered blocks; every edit yields a new sequence
//! 2. **Pure operations**: callers keep their input untouched, which makes
//!    identity reasoning and testing trivial
//! 3. **Stale ids are no-ops**: editing UIs race with deletions, so
//!    update/delete/move of an unknown id returns the sequence unchanged
//!    rather than failing
//!
//! ## Usage
//!
//! ```rust
//! use lorebase_editor::{Document, Mutation, ops};
//! use lorebase_model::{BlockKind, IdGenerator};
//!
//! let mut gen = IdGenerator::new("guides/setup");
//! let block = ops::create_block(BlockKind::Paragraph, &mut gen);
//!
//! let mut doc = Document::new();
//! doc.apply(Mutation::Insert { block, after_id: None }).unwrap();
//! assert_eq!(doc.blocks().len(), 1);
//! assert_eq!(doc.version(), 1);
//! ```

mod document;
mod errors;
mod mutations;
pub mod ops;
mod undo_stack;

pub use document::Document;
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use ops::Direction;
pub use undo_stack::UndoStack;

// Re-export the model types the editor API speaks in
pub use lorebase_model::{Block, BlockContent, BlockKind, ChecklistItem, IdGenerator};
