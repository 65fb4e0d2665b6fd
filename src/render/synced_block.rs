// src/render/synced_block.rs
//! Synced blocks: a bordered container around the synced content.

use super::block_renderer::{render_blocks, RenderContext};
use super::html::class_attr;
use crate::error::AppError;
use crate::model::{Block, SyncedBlock};

const CONTAINER_CLASS: &str = "flex flex-1 flex-col overflow-hidden rounded-md border border-white p-1";

/// Hover border for a reference to another synced block.
pub const REFERENCE_HOVER: &str = "hover:border-red-200";
/// Hover border for the original.
pub const ORIGINAL_HOVER: &str = "hover:border-red-400";

/// Renders nothing until children are resolved. Children render at the
/// block's own level.
pub fn render_synced_block(
    block: &Block,
    synced: &SyncedBlock,
    ctx: &RenderContext,
) -> Result<String, AppError> {
    let Some(children) = block.children() else {
        return Ok(String::new());
    };

    let hover = if synced.synced_from.is_some() {
        REFERENCE_HOVER
    } else {
        ORIGINAL_HOVER
    };

    Ok(format!(
        "<div{}>{}</div>",
        class_attr(&[ctx.class(), CONTAINER_CLASS, hover]),
        render_blocks(children, &ctx.without_class())?
    ))
}
