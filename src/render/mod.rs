// src/render/mod.rs
//! HTML rendering of materialized block trees and page layouts.

mod block_renderer;
pub mod html;
mod layout;
mod lists;
mod rich_text;
mod synced_block;
mod table;

pub use block_renderer::{render_block, render_blocks, RenderContext};
pub use layout::{render_error, render_index, render_post, PostSummary};
pub use rich_text::render_rich_text;
pub use synced_block::{ORIGINAL_HOVER, REFERENCE_HOVER};
pub use table::render_table;
