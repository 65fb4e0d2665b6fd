// src/render/table.rs
//! Tables: a `table` block whose `table_row` children hold the cells.

use super::block_renderer::RenderContext;
use super::html::class_attr;
use super::rich_text::render_rich_text;
use crate::error::AppError;
use crate::model::{Block, TableBlock, TableRowBlock};
use std::fmt::Write;

const TABLE_CLASS: &str = "w-full max-w-full border-collapse border border-solid border-inherit text-left";
const CELL_CLASS: &str = "border border-solid border-inherit px-3 py-1.5";
const HEADER_CLASS: &str = "bg-stone-100";

/// Renders the table. The first row is a header row only when
/// `has_column_header`; the first column is styled as a header only when
/// `has_row_header`.
pub fn render_table(
    block: &Block,
    table: &TableBlock,
    ctx: &RenderContext,
) -> Result<String, AppError> {
    let mut out = String::new();
    write!(out, "<table{}><tbody>", class_attr(&[ctx.class(), TABLE_CLASS]))?;

    let rows = block.children().unwrap_or_default();
    for (index, row) in rows.iter().enumerate() {
        match row {
            Block::TableRow(row) => {
                let header_row = table.has_column_header && index == 0;
                out.push_str(&render_table_row(row, header_row, table.has_row_header));
            }
            other => {
                log::warn!(
                    "Table {} has a non-row child of type '{}', skipping",
                    table.common.id,
                    other.block_type()
                );
            }
        }
    }

    out.push_str("</tbody></table>");
    Ok(out)
}

/// One `<tr>`. Cells are `<th>` throughout a header row, `<td>` otherwise.
pub fn render_table_row(row: &TableRowBlock, header_row: bool, row_header: bool) -> String {
    let tag = if header_row { "th" } else { "td" };

    let cells: String = row
        .cells
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            let row_style = if header_row { HEADER_CLASS } else { "" };
            let column_style = if column == 0 && row_header {
                HEADER_CLASS
            } else {
                ""
            };
            format!(
                "<{tag}{class}>{content}</{tag}>",
                tag = tag,
                class = class_attr(&[row_style, column_style, CELL_CLASS]),
                content = render_rich_text(cell)
            )
        })
        .collect();

    format!("<tr>{}</tr>", cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockCommon;
    use crate::types::{BlockId, RichTextItem};

    fn row(cells: &[&str]) -> Block {
        Block::TableRow(TableRowBlock {
            common: BlockCommon::new(BlockId::new_v4()),
            cells: cells
                .iter()
                .map(|text| vec![RichTextItem::plain_text(text)])
                .collect(),
        })
    }

    fn table(has_column_header: bool, has_row_header: bool) -> (Block, TableBlock) {
        let payload = TableBlock {
            common: BlockCommon::new(BlockId::new_v4()),
            table_width: 2,
            has_column_header,
            has_row_header,
        };
        let block = Block::Table(TableBlock {
            common: payload
                .common
                .clone()
                .with_children(vec![row(&["a", "b"]), row(&["c", "d"])]),
            ..payload.clone()
        });
        (block, payload)
    }

    #[test]
    fn test_row_header_styles_first_column_of_every_row() {
        let (block, payload) = table(false, true);
        let html = render_table(&block, &payload, &RenderContext::root()).unwrap();

        assert!(!html.contains("<th"));
        assert_eq!(html.matches(HEADER_CLASS).count(), 2);
        assert!(html.contains(&format!(
            r#"<td class="{} {}">c</td>"#,
            HEADER_CLASS, CELL_CLASS
        )));
    }

    #[test]
    fn test_column_header_styles_first_row_only() {
        let (block, payload) = table(true, false);
        let html = render_table(&block, &payload, &RenderContext::root()).unwrap();

        let header = format!(r#"<th class="{} {}">"#, HEADER_CLASS, CELL_CLASS);
        let plain = format!(r#"<td class="{}">"#, CELL_CLASS);
        assert_eq!(
            html,
            format!(
                r#"<table class="{}"><tbody><tr>{h}a</th>{h}b</th></tr><tr>{p}c</td>{p}d</td></tr></tbody></table>"#,
                TABLE_CLASS,
                h = header,
                p = plain
            )
        );
    }

    #[test]
    fn test_plain_table_has_no_header_styling() {
        let (block, payload) = table(false, false);
        let html = render_table(&block, &payload, &RenderContext::root()).unwrap();

        assert!(!html.contains(HEADER_CLASS));
        assert_eq!(html.matches("<td").count(), 4);
    }
}
