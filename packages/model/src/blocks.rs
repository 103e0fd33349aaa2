//! Block-document body types.
//!
//! A document body is an ordered sequence of [`Block`]s. Each block carries a
//! type-specific payload; the payload shape is enforced by the type system
//! (one [`BlockContent`] variant per block type), so a type/payload mismatch
//! is unrepresentable.
//!
//! The serialized form matches what the storage backend persists:
//!
//! ```json
//! { "id": "a3f9c2-1", "type": "heading", "content": { "level": 1, "text": "" } }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A single content unit within a document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque unique id, stable for the block's lifetime.
    pub id: String,

    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    pub fn new(id: impl Into<String>, content: BlockContent) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// The block's type tag.
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }
}

/// One item of a checklist block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub checked: bool,
}

/// Type-specific block payload. Closed set; adding a block type means adding
/// a variant here and handling it in every exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum BlockContent {
    Heading {
        /// Heading depth, 1–4.
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    List {
        items: Vec<String>,
        ordered: bool,
    },
    Code {
        code: String,
        language: String,
    },
    Image {
        url: String,
        alt: String,
        caption: String,
    },
    Quote {
        text: String,
        author: String,
    },
    Checklist {
        items: Vec<ChecklistItem>,
    },
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Heading { .. } => BlockKind::Heading,
            BlockContent::Paragraph { .. } => BlockKind::Paragraph,
            BlockContent::List { .. } => BlockKind::List,
            BlockContent::Code { .. } => BlockKind::Code,
            BlockContent::Image { .. } => BlockKind::Image,
            BlockContent::Quote { .. } => BlockKind::Quote,
            BlockContent::Checklist { .. } => BlockKind::Checklist,
        }
    }

    /// The default payload a freshly created block of `kind` starts with.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => BlockContent::Heading {
                level: 1,
                text: String::new(),
            },
            BlockKind::Paragraph => BlockContent::Paragraph {
                text: String::new(),
            },
            BlockKind::List => BlockContent::List {
                items: vec![String::new()],
                ordered: false,
            },
            BlockKind::Code => BlockContent::Code {
                code: String::new(),
                language: "javascript".to_string(),
            },
            BlockKind::Image => BlockContent::Image {
                url: String::new(),
                alt: String::new(),
                caption: String::new(),
            },
            BlockKind::Quote => BlockContent::Quote {
                text: String::new(),
                author: String::new(),
            },
            BlockKind::Checklist => BlockContent::Checklist {
                items: vec![ChecklistItem {
                    text: String::new(),
                    checked: false,
                }],
            },
        }
    }
}

/// Fieldless block type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Paragraph,
    List,
    Code,
    Image,
    Quote,
    Checklist,
}

impl BlockKind {
    /// Every block type, in menu order.
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::List,
        BlockKind::Code,
        BlockKind::Image,
        BlockKind::Quote,
        BlockKind::Checklist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::List => "list",
            BlockKind::Code => "code",
            BlockKind::Image => "image",
            BlockKind::Quote => "quote",
            BlockKind::Checklist => "checklist",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(BlockKind::Heading),
            "paragraph" => Ok(BlockKind::Paragraph),
            "list" => Ok(BlockKind::List),
            "code" => Ok(BlockKind::Code),
            "image" => Ok(BlockKind::Image),
            "quote" => Ok(BlockKind::Quote),
            "checklist" => Ok(BlockKind::Checklist),
            other => Err(ModelError::UnsupportedBlockType(other.to_string())),
        }
    }
}
