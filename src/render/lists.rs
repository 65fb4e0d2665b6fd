// src/render/lists.rs
//! Bulleted and numbered lists.
//!
//! Grouping has already wrapped runs of items in `BulletedList` /
//! `NumberedList` containers; an item outside a container renders as a
//! list of one.

use super::block_renderer::{color_class, render_block, render_blocks, RenderContext};
use super::html::class_attr;
use super::rich_text::render_rich_text;
use crate::error::AppError;
use crate::model::{Block, ListBlock, ListKind};

/// Numbering styles, cycled by nesting level.
const NUMBERED_STYLES: [&str; 3] = ["list-decimal", "list-lower-alpha", "list-lower-roman"];

fn list_open_tag(kind: ListKind, ctx: &RenderContext) -> String {
    match kind {
        ListKind::Bulleted => format!("<ul{}>", class_attr(&[ctx.class(), "list-disc pl-6"])),
        ListKind::Numbered => {
            let style = NUMBERED_STYLES[ctx.level % NUMBERED_STYLES.len()];
            format!("<ol{}>", class_attr(&[ctx.class(), style, "pl-6"]))
        }
    }
}

fn list_close_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Bulleted => "</ul>",
        ListKind::Numbered => "</ol>",
    }
}

pub fn render_list(
    list: &ListBlock,
    kind: ListKind,
    ctx: &RenderContext,
) -> Result<String, AppError> {
    let mut out = list_open_tag(kind, ctx);
    for item in list.items() {
        out.push_str(&render_item(item, ctx)?);
    }
    out.push_str(list_close_tag(kind));
    Ok(out)
}

pub fn render_stray_item(
    item: &Block,
    kind: ListKind,
    ctx: &RenderContext,
) -> Result<String, AppError> {
    Ok(format!(
        "{}{}{}",
        list_open_tag(kind, ctx),
        render_item(item, ctx)?,
        list_close_tag(kind)
    ))
}

/// One `<li>`; nested children render one level deeper.
fn render_item(item: &Block, ctx: &RenderContext) -> Result<String, AppError> {
    let content = match item {
        Block::BulletedListItem(li) | Block::NumberedListItem(li) => &li.content,
        other => return Ok(format!("<li>{}</li>", render_block(other, &ctx.nested())?)),
    };

    let nested = match item.children() {
        Some(children) => render_blocks(children, &ctx.nested())?,
        None => String::new(),
    };

    Ok(format!(
        "<li{}>{}{}</li>",
        class_attr(&[&color_class(content)]),
        render_rich_text(&content.rich_text),
        nested
    ))
}
