use super::Block;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    /// Resolved children; `None` until materialization attaches them.
    pub children: Option<Vec<Block>>,
    pub has_children: bool,
    pub archived: bool,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            children: None,
            has_children: false,
            archived: false,
        }
    }

    /// Marks the block as having children on the remote side, without
    /// resolving them.
    pub fn with_remote_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.has_children = !children.is_empty();
        self.children = Some(children);
        self
    }
}

impl Default for BlockCommon {
    fn default() -> Self {
        Self::new(BlockId::new_v4())
    }
}
