//! Pure block-sequence operations.
//!
//! Every function takes the current sequence by reference and returns a
//! fresh `Vec<Block>`; the input is never mutated. Unknown target ids are
//! no-ops (the result compares equal to the input), and boundary moves are
//! no-ops rather than errors.

use lorebase_model::{Block, BlockContent, BlockKind, IdGenerator};
use serde::{Deserialize, Serialize};

/// Direction of a neighbor swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Create a block of the given kind with its default payload and a fresh id.
pub fn create_block(kind: BlockKind, gen: &mut IdGenerator) -> Block {
    Block::new(gen.next_id(), BlockContent::default_for(kind))
}

/// Insert `new` immediately after the block with `after_id`.
///
/// Appends at the end when `after_id` is `None` or matches nothing. The
/// result is always one block longer and preserves the relative order of
/// every existing block.
pub fn insert_block(blocks: &[Block], new: Block, after_id: Option<&str>) -> Vec<Block> {
    let mut next: Vec<Block> = blocks.to_vec();
    let index = after_id.and_then(|id| next.iter().position(|b| b.id == id));

    match index {
        Some(i) => next.insert(i + 1, new),
        None => next.push(new),
    }

    next
}

/// Replace the payload of the block with `id`, keeping its id and position.
///
/// Unknown `id` returns the sequence unchanged.
pub fn update_block_content(blocks: &[Block], id: &str, content: BlockContent) -> Vec<Block> {
    blocks
        .iter()
        .map(|b| {
            if b.id == id {
                Block::new(b.id.clone(), content.clone())
            } else {
                b.clone()
            }
        })
        .collect()
}

/// Remove the block with `id`. Unknown `id` returns the sequence unchanged;
/// the relative order of the remaining blocks never changes.
pub fn delete_block(blocks: &[Block], id: &str) -> Vec<Block> {
    blocks.iter().filter(|b| b.id != id).cloned().collect()
}

/// Swap the block with `id` with its immediate neighbor in `direction`.
///
/// Moving the first block up or the last block down is a no-op, as is an
/// unknown `id`.
pub fn move_block(blocks: &[Block], id: &str, direction: Direction) -> Vec<Block> {
    let mut next: Vec<Block> = blocks.to_vec();

    let Some(index) = next.iter().position(|b| b.id == id) else {
        return next;
    };

    match direction {
        Direction::Up if index > 0 => next.swap(index, index - 1),
        Direction::Down if index + 1 < next.len() => next.swap(index, index + 1),
        _ => {}
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(id: &str, text: &str) -> Block {
        Block::new(
            id,
            BlockContent::Paragraph {
                text: text.to_string(),
            },
        )
    }

    fn ids(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_create_block_uses_default_payload() {
        let mut gen = IdGenerator::new("test");
        let block = create_block(BlockKind::List, &mut gen);

        assert_eq!(
            block.content,
            BlockContent::List {
                items: vec![String::new()],
                ordered: false,
            }
        );
    }

    #[test]
    fn test_create_block_ids_are_unique() {
        let mut gen = IdGenerator::new("test");
        let a = create_block(BlockKind::Paragraph, &mut gen);
        let b = create_block(BlockKind::Paragraph, &mut gen);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_insert_after_existing_block() {
        let blocks = vec![paragraph("a", ""), paragraph("b", "")];
        let next = insert_block(&blocks, paragraph("x", ""), Some("a"));

        assert_eq!(ids(&next), vec!["a", "x", "b"]);
        // input untouched
        assert_eq!(ids(&blocks), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_appends_without_anchor() {
        let blocks = vec![paragraph("a", "")];
        let next = insert_block(&blocks, paragraph("x", ""), None);
        assert_eq!(ids(&next), vec!["a", "x"]);
    }

    #[test]
    fn test_insert_appends_on_unknown_anchor() {
        let blocks = vec![paragraph("a", ""), paragraph("b", "")];
        let next = insert_block(&blocks, paragraph("x", ""), Some("gone"));
        assert_eq!(ids(&next), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_insert_grows_by_one() {
        let blocks = vec![paragraph("a", ""), paragraph("b", ""), paragraph("c", "")];
        let next = insert_block(&blocks, paragraph("x", ""), Some("b"));
        assert_eq!(next.len(), blocks.len() + 1);
    }

    #[test]
    fn test_update_replaces_payload_in_place() {
        let blocks = vec![paragraph("a", "old"), paragraph("b", "keep")];
        let next = update_block_content(
            &blocks,
            "a",
            BlockContent::Paragraph {
                text: "new".to_string(),
            },
        );

        assert_eq!(
            next[0].content,
            BlockContent::Paragraph {
                text: "new".to_string()
            }
        );
        assert_eq!(next[1], blocks[1]);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let blocks = vec![paragraph("a", "text")];
        let next = update_block_content(
            &blocks,
            "gone",
            BlockContent::Paragraph {
                text: "x".to_string(),
            },
        );
        assert_eq!(next, blocks);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let blocks = vec![paragraph("a", ""), paragraph("b", ""), paragraph("c", "")];
        let next = delete_block(&blocks, "b");
        assert_eq!(ids(&next), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let blocks = vec![paragraph("a", "")];
        assert_eq!(delete_block(&blocks, "gone"), blocks);
    }

    #[test]
    fn test_move_up_swaps_with_previous() {
        let blocks = vec![paragraph("a", ""), paragraph("b", ""), paragraph("c", "")];
        let next = move_block(&blocks, "b", Direction::Up);
        assert_eq!(ids(&next), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_at_boundary_is_noop() {
        let blocks = vec![paragraph("a", ""), paragraph("b", "")];
        assert_eq!(move_block(&blocks, "a", Direction::Up), blocks);
        assert_eq!(move_block(&blocks, "b", Direction::Down), blocks);
    }

    #[test]
    fn test_move_up_then_down_restores_sequence() {
        let blocks = vec![paragraph("a", ""), paragraph("b", ""), paragraph("c", "")];
        let moved = move_block(&blocks, "b", Direction::Up);
        let back = move_block(&moved, "b", Direction::Down);
        assert_eq!(back, blocks);
    }
}
