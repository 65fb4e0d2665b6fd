//! Folds runs of adjacent list items into synthetic list containers.
//!
//! Notion returns list items as flat siblings; HTML wants them inside a
//! `<ul>`/`<ol>`. The fold is pure and preserves sibling order.

use super::blocks::ListBlock;
use super::common::BlockCommon;
use super::Block;
use crate::types::BlockId;

/// The two kinds of list Notion has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    /// The kind of list item `block` is, if it is one.
    pub fn of_item(block: &Block) -> Option<Self> {
        match block {
            Block::BulletedListItem(_) => Some(Self::Bulleted),
            Block::NumberedListItem(_) => Some(Self::Numbered),
            _ => None,
        }
    }

    /// The type tag of the container this kind groups into.
    pub fn container_type(self) -> &'static str {
        match self {
            Self::Bulleted => "bulleted_list",
            Self::Numbered => "numbered_list",
        }
    }

    fn is_container(self, block: &Block) -> bool {
        matches!(
            (self, block),
            (Self::Bulleted, Block::BulletedList(_)) | (Self::Numbered, Block::NumberedList(_))
        )
    }

    fn open_container(self, id: BlockId, first_item: Block) -> Block {
        let list = ListBlock {
            common: BlockCommon::new(id).with_children(vec![first_item]),
        };
        match self {
            Self::Bulleted => Block::BulletedList(list),
            Self::Numbered => Block::NumberedList(list),
        }
    }
}

/// Groups consecutive same-kind list items under `parent`.
///
/// A list item joins the container immediately before it when that
/// container is of its own kind; otherwise it opens a new one. Every other
/// block passes through unchanged and closes any open container. Container
/// ids derive from `parent` and the container's output position, so the
/// result is deterministic.
pub fn group_list_items(parent: &BlockId, blocks: Vec<Block>) -> Vec<Block> {
    let mut grouped: Vec<Block> = Vec::with_capacity(blocks.len());

    for block in blocks {
        let Some(kind) = ListKind::of_item(&block) else {
            grouped.push(block);
            continue;
        };

        match grouped.last_mut() {
            Some(last) if kind.is_container(last) => last.push_child(block),
            _ => {
                let id = BlockId::synthetic(parent, kind.container_type(), grouped.len());
                grouped.push(kind.open_container(id, block));
            }
        }
    }

    grouped
}
