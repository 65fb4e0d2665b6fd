// src/render/block_renderer.rs
//! Block rendering engine: converts a materialized block tree to HTML.
//!
//! Every renderer takes the block plus a `RenderContext` and returns the
//! block's markup; `render_block` dispatches on the variant.

use super::html::{anchor_id, class_attr, escape_html, is_safe_href};
use super::lists::{render_list, render_stray_item};
use super::rich_text::render_rich_text;
use super::synced_block::render_synced_block;
use super::table::{render_table, render_table_row};
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::error::AppError;
use crate::model::{
    Block, CalloutBlock, CodeBlock, HeadingBlock, Icon, ImageBlock, ListKind, TextBlockContent,
};
use crate::types::{plain_text_of, RichTextItem};
use std::fmt::Write;

/// Where in the tree a block is being rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext<'a> {
    /// Nesting depth, 0 at the page root.
    pub level: usize,
    /// Extra classes for the block's outermost element.
    pub class_name: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn with_class(class_name: &'a str) -> Self {
        Self {
            level: 0,
            class_name: Some(class_name),
        }
    }

    /// Context for the children of the current block.
    pub fn nested(&self) -> RenderContext<'static> {
        RenderContext {
            level: self.level + 1,
            class_name: None,
        }
    }

    /// Same level, without the extra classes.
    pub fn without_class(&self) -> RenderContext<'static> {
        RenderContext {
            level: self.level,
            class_name: None,
        }
    }

    pub fn class(&self) -> &str {
        self.class_name.unwrap_or_default()
    }
}

/// Renders a slice of sibling blocks in order.
pub fn render_blocks(blocks: &[Block], ctx: &RenderContext) -> Result<String, AppError> {
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    for block in blocks {
        output.push_str(&render_block(block, ctx)?);
    }
    Ok(output)
}

/// Renders one block and, where the block type nests, its children.
pub fn render_block(block: &Block, ctx: &RenderContext) -> Result<String, AppError> {
    let mut out = String::new();

    match block {
        Block::Paragraph(p) => {
            write!(
                out,
                "<p{}>{}</p>",
                text_class(&p.content, ctx),
                render_rich_text(&p.content.rich_text)
            )?;
            out.push_str(&render_indented_children(block, ctx)?);
        }
        Block::Heading1(h) => out.push_str(&render_heading(block, h, 1, ctx)?),
        Block::Heading2(h) => out.push_str(&render_heading(block, h, 2, ctx)?),
        Block::Heading3(h) => out.push_str(&render_heading(block, h, 3, ctx)?),
        Block::BulletedList(list) => out.push_str(&render_list(list, ListKind::Bulleted, ctx)?),
        Block::NumberedList(list) => out.push_str(&render_list(list, ListKind::Numbered, ctx)?),
        Block::BulletedListItem(_) => out.push_str(&render_stray_item(block, ListKind::Bulleted, ctx)?),
        Block::NumberedListItem(_) => out.push_str(&render_stray_item(block, ListKind::Numbered, ctx)?),
        Block::ToDo(todo) => {
            write!(
                out,
                "<div{}><input type=\"checkbox\" disabled{}> <span{}>{}</span></div>",
                class_attr(&["notion-to-do", ctx.class()]),
                if todo.checked { " checked" } else { "" },
                if todo.checked {
                    class_attr(&["line-through", &color_class(&todo.content)])
                } else {
                    class_attr(&[&color_class(&todo.content)])
                },
                render_rich_text(&todo.content.rich_text)
            )?;
            out.push_str(&render_indented_children(block, ctx)?);
        }
        Block::Toggle(toggle) => {
            write!(
                out,
                "<details{}><summary>{}</summary>{}</details>",
                text_class(&toggle.content, ctx),
                render_rich_text(&toggle.content.rich_text),
                render_children(block, &ctx.nested())?
            )?;
        }
        Block::Quote(quote) => {
            write!(
                out,
                "<blockquote{}>{}{}</blockquote>",
                class_attr(&["border-l-4 pl-4", ctx.class(), &color_class(&quote.content)]),
                render_rich_text(&quote.content.rich_text),
                render_children(block, &ctx.nested())?
            )?;
        }
        Block::Callout(callout) => out.push_str(&render_callout(block, callout, ctx)?),
        Block::Code(code) => out.push_str(&render_code(code, ctx)?),
        Block::Equation(eq) => {
            write!(
                out,
                "<div{}>{}</div>",
                class_attr(&["equation", ctx.class()]),
                escape_html(&eq.expression)
            )?;
        }
        Block::Divider(_) => write!(out, "<hr{}>", class_attr(&[ctx.class()]))?,
        Block::Image(image) => out.push_str(&render_image(image, ctx)?),
        Block::Bookmark(bookmark) => {
            let url = escape_html(&bookmark.url);
            let link = if is_safe_href(&bookmark.url) {
                format!("<a class=\"notion-bookmark\" href=\"{}\">{}</a>", url, url)
            } else {
                format!("<span class=\"notion-bookmark\">{}</span>", url)
            };
            write!(
                out,
                "<div{}>{}{}</div>",
                class_attr(&[ctx.class()]),
                link,
                caption(&bookmark.caption)
            )?;
        }
        Block::ChildPage(child) => {
            write!(
                out,
                "<a{} href=\"/pages/{}\">{}</a>",
                class_attr(&["notion-child-page", ctx.class()]),
                child.common.id,
                escape_html(&child.title)
            )?;
        }
        Block::Table(table) => out.push_str(&render_table(block, table, ctx)?),
        Block::TableRow(row) => out.push_str(&render_table_row(row, false, false)),
        Block::ColumnList(_) => {
            write!(
                out,
                "<div{}>{}</div>",
                class_attr(&["flex flex-col gap-4 md:flex-row", ctx.class()]),
                render_children(block, &ctx.without_class())?
            )?;
        }
        Block::Column(_) => {
            write!(
                out,
                "<div{}>{}</div>",
                class_attr(&["flex-1", ctx.class()]),
                render_children(block, &ctx.nested())?
            )?;
        }
        Block::Synced(synced) => out.push_str(&render_synced_block(block, synced, ctx)?),
        Block::Unsupported(unsupported) => {
            log::debug!("No renderer for block type '{}'", unsupported.block_type);
            write!(
                out,
                "<!-- unsupported block: {} -->",
                unsupported.block_type.replace("--", "")
            )?;
        }
    }

    Ok(out)
}

/// The block's resolved children, rendered with `ctx`; empty when absent.
pub(super) fn render_children(block: &Block, ctx: &RenderContext) -> Result<String, AppError> {
    match block.children() {
        Some(children) => render_blocks(children, ctx),
        None => Ok(String::new()),
    }
}

/// Children of a text block, indented under it.
fn render_indented_children(block: &Block, ctx: &RenderContext) -> Result<String, AppError> {
    match block.children() {
        Some(children) if !children.is_empty() => Ok(format!(
            "<div class=\"pl-6\">{}</div>",
            render_blocks(children, &ctx.nested())?
        )),
        _ => Ok(String::new()),
    }
}

pub(super) fn color_class(content: &TextBlockContent) -> String {
    content.color.css_class().unwrap_or_default()
}

fn text_class(content: &TextBlockContent, ctx: &RenderContext) -> String {
    class_attr(&[ctx.class(), &color_class(content)])
}

fn render_heading(
    block: &Block,
    heading: &HeadingBlock,
    level: u8,
    ctx: &RenderContext,
) -> Result<String, AppError> {
    let text = plain_text_of(&heading.content.rich_text);
    let anchor = anchor_id(&text);
    let id_attr = if anchor.is_empty() {
        String::new()
    } else {
        format!(" id=\"{}\"", anchor)
    };

    let heading_html = format!(
        "<h{level}{id}{class}>{text}</h{level}>",
        level = level,
        id = id_attr,
        class = text_class(&heading.content, ctx),
        text = render_rich_text(&heading.content.rich_text)
    );

    if heading.is_toggleable {
        Ok(format!(
            "<details><summary>{}</summary>{}</details>",
            heading_html,
            render_children(block, &ctx.nested())?
        ))
    } else {
        Ok(heading_html)
    }
}

fn render_callout(
    block: &Block,
    callout: &CalloutBlock,
    ctx: &RenderContext,
) -> Result<String, AppError> {
    let icon = match &callout.icon {
        Some(Icon::Emoji { emoji }) => {
            format!("<span class=\"notion-callout-icon\">{}</span>", escape_html(emoji))
        }
        Some(Icon::External { external }) => format!(
            "<img class=\"notion-callout-icon\" src=\"{}\" alt=\"\">",
            escape_html(&external.url)
        ),
        Some(Icon::File { file }) => format!(
            "<img class=\"notion-callout-icon\" src=\"{}\" alt=\"\">",
            escape_html(&file.url)
        ),
        None => String::new(),
    };

    Ok(format!(
        "<div{}>{}<div>{}{}</div></div>",
        class_attr(&[
            "notion-callout flex gap-2 rounded-md p-4",
            ctx.class(),
            &color_class(&callout.content)
        ]),
        icon,
        render_rich_text(&callout.content.rich_text),
        render_children(block, &ctx.nested())?
    ))
}

fn render_code(code: &CodeBlock, ctx: &RenderContext) -> Result<String, AppError> {
    let mut out = String::new();
    let language = escape_html(&code.language);
    let body = format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        language,
        escape_html(&plain_text_of(&code.content.rich_text))
    );

    write!(
        out,
        "<figure{}>{}{}</figure>",
        class_attr(&["notion-code", ctx.class()]),
        body,
        caption(&code.caption)
    )?;
    Ok(out)
}

fn render_image(image: &ImageBlock, ctx: &RenderContext) -> Result<String, AppError> {
    let mut out = String::new();
    write!(
        out,
        "<figure{}><img src=\"{}\" alt=\"{}\" loading=\"lazy\">{}</figure>",
        class_attr(&["notion-image", ctx.class()]),
        escape_html(image.image.url()),
        escape_html(&plain_text_of(&image.caption)),
        caption(&image.caption)
    )?;
    Ok(out)
}

fn caption(items: &[RichTextItem]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!("<figcaption>{}</figcaption>", render_rich_text(items))
    }
}
