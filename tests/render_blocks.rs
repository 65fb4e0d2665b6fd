// tests/render_blocks.rs
//! HTML output for materialized block trees.

mod common;

use common::*;
use notion_blogger::model::group_list_items;
use notion_blogger::render::{ORIGINAL_HOVER, REFERENCE_HOVER};
use notion_blogger::{render_blocks, RenderContext};
use pretty_assertions::assert_eq;

#[test]
fn table_with_column_header_uses_th_for_the_first_row_only() {
    let block = table(
        1,
        true,
        false,
        vec![table_row(2, &["Name", "Role"]), table_row(3, &["Ada", "Engineer"])],
    );

    let html = render_blocks(&[block], &RenderContext::root()).unwrap();

    assert_eq!(html.matches("<th").count(), 2);
    assert_eq!(html.matches("<td").count(), 2);
    assert!(html.contains(">Name</th>"));
    assert!(html.contains(">Ada</td>"));
    let first_body_cell = html.find("<td").unwrap();
    assert!(html.find("</th>").unwrap() < first_body_cell);
    // Later rows, column 0 included, carry no header styling.
    assert!(!html[first_body_cell..].contains("bg-stone-100"));
}

#[test]
fn table_without_headers_is_all_td() {
    let block = table(
        1,
        false,
        false,
        vec![table_row(2, &["a", "b"]), table_row(3, &["c", "d"])],
    );

    let html = render_blocks(&[block], &RenderContext::root()).unwrap();

    assert!(!html.contains("<th"));
    assert!(!html.contains("bg-stone-100"));
}

#[test]
fn table_cells_are_escaped() {
    let block = table(1, false, false, vec![table_row(2, &["<b>", "&"])]);

    let html = render_blocks(&[block], &RenderContext::root()).unwrap();

    assert!(html.contains("&lt;b&gt;"));
    assert!(html.contains("&amp;"));
}

#[test]
fn synced_block_without_children_renders_nothing() {
    let html = render_blocks(&[synced(1, None, None)], &RenderContext::root()).unwrap();
    assert_eq!(html, "");
}

#[test]
fn synced_original_and_reference_hover_differently() {
    let original = synced(1, None, Some(vec![paragraph(2, "shared")]));
    let reference = synced(3, Some(1), Some(vec![paragraph(4, "shared")]));

    let original_html = render_blocks(&[original], &RenderContext::root()).unwrap();
    let reference_html = render_blocks(&[reference], &RenderContext::root()).unwrap();

    assert!(original_html.contains(ORIGINAL_HOVER));
    assert!(!original_html.contains(REFERENCE_HOVER));
    assert!(reference_html.contains(REFERENCE_HOVER));
    assert!(reference_html.contains("<p>shared</p>"));
}

#[test]
fn synced_block_passes_class_to_its_container_only() {
    let block = synced(1, None, Some(vec![paragraph(2, "inner")]));

    let html = render_blocks(&[block], &RenderContext::with_class("mt-4")).unwrap();

    assert!(html.starts_with(r#"<div class="mt-4 "#));
    assert!(html.contains("<p>inner</p>"));
}

#[test]
fn grouped_lists_render_as_ul_and_ol() {
    let blocks = group_list_items(
        &id(1),
        vec![
            bulleted(2, "apple"),
            bulleted(3, "pear"),
            paragraph(4, "then"),
            numbered(5, "first"),
        ],
    );

    let html = render_blocks(&blocks, &RenderContext::root()).unwrap();

    assert_eq!(
        html,
        concat!(
            r#"<ul class="list-disc pl-6"><li>apple</li><li>pear</li></ul>"#,
            "<p>then</p>",
            r#"<ol class="list-decimal pl-6"><li>first</li></ol>"#
        )
    );
}

#[test]
fn child_page_renders_as_a_link() {
    let html = render_blocks(&[child_page(9, "Appendix")], &RenderContext::root()).unwrap();

    assert!(html.contains(&format!(r#"href="/pages/{}""#, raw_id(9))));
    assert!(html.contains("Appendix"));
}

#[test]
fn mixed_page_snapshot() {
    let blocks = group_list_items(
        &id(1),
        vec![
            paragraph(2, "Welcome"),
            bulleted(3, "one"),
            bulleted(4, "two"),
            table(
                5,
                true,
                true,
                vec![table_row(6, &["k", "v"]), table_row(7, &["a", "1"])],
            ),
            synced(8, Some(2), Some(vec![paragraph(9, "synced")])),
        ],
    );

    let html = render_blocks(&blocks, &RenderContext::root()).unwrap();

    insta::assert_snapshot!(html);
}
