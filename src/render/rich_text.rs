// src/render/rich_text.rs
//! Rich text runs to inline HTML.

use super::html::{class_attr, escape_html, is_safe_href};
use crate::types::{Annotations, MentionType, RichTextItem, RichTextType};

/// Renders a rich text run. Text is escaped; annotations wrap it from the
/// inside out: code, bold, italic, strikethrough, underline, color, link.
pub fn render_rich_text(items: &[RichTextItem]) -> String {
    items.iter().map(render_item).collect()
}

fn render_item(item: &RichTextItem) -> String {
    let (inner, link) = match &item.text_type {
        RichTextType::Text { content, link } => (
            escape_html(content),
            link.as_ref().map(|l| l.url.clone()).or_else(|| item.href.clone()),
        ),
        RichTextType::Equation { expression } => (
            format!("<span class=\"equation\">{}</span>", escape_html(expression)),
            None,
        ),
        RichTextType::Mention(mention) => render_mention(mention, item),
    };

    let styled = apply_annotations(inner, &item.annotations);
    match link.filter(|url| is_safe_href(url)) {
        Some(url) => format!("<a href=\"{}\">{}</a>", escape_html(&url), styled),
        None => styled,
    }
}

fn render_mention(mention: &MentionType, item: &RichTextItem) -> (String, Option<String>) {
    let text = escape_html(&item.plain_text);
    match mention {
        MentionType::Page { page_id } => (text, Some(format!("/pages/{}", page_id))),
        MentionType::Link { url } => (text, Some(url.clone())),
        MentionType::Date { date } => {
            let rendered = match date.end {
                Some(end) => format!("{} → {}", date.start, end),
                None => date.start.to_string(),
            };
            (
                format!("<time datetime=\"{}\">{}</time>", date.start, escape_html(&rendered)),
                None,
            )
        }
        MentionType::User { name } => {
            let name = name.as_deref().unwrap_or(&item.plain_text);
            (
                format!("<span class=\"mention\">@{}</span>", escape_html(name.trim_start_matches('@'))),
                None,
            )
        }
        MentionType::Other => (text, item.href.clone()),
    }
}

fn apply_annotations(mut html: String, annotations: &Annotations) -> String {
    if annotations.code {
        html = format!("<code>{}</code>", html);
    }
    if annotations.bold {
        html = format!("<strong>{}</strong>", html);
    }
    if annotations.italic {
        html = format!("<em>{}</em>", html);
    }
    if annotations.strikethrough {
        html = format!("<s>{}</s>", html);
    }
    if annotations.underline {
        html = format!("<u>{}</u>", html);
    }
    if let Some(class) = annotations.color.css_class() {
        html = format!("<span{}>{}</span>", class_attr(&[&class]), html);
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, DateValue, PageId};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_is_escaped() {
        let items = vec![RichTextItem::plain_text("1 < 2 & 3")];
        assert_eq!(render_rich_text(&items), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn test_annotations_nest() {
        let item = RichTextItem::plain_text("hi").with_annotations(Annotations {
            bold: true,
            italic: true,
            code: true,
            color: Color::Red,
            ..Default::default()
        });
        assert_eq!(
            render_rich_text(&[item]),
            r#"<span class="notion-red"><em><strong><code>hi</code></strong></em></span>"#
        );
    }

    #[test]
    fn test_link_wraps_styled_text() {
        let item = RichTextItem::link("docs", "https://example.com/?a=1&b=2").with_annotations(
            Annotations {
                underline: true,
                ..Default::default()
            },
        );
        assert_eq!(
            render_rich_text(&[item]),
            r#"<a href="https://example.com/?a=1&amp;b=2"><u>docs</u></a>"#
        );
    }

    #[test]
    fn test_script_links_render_as_plain_text() {
        let item = RichTextItem::link("click", "javascript:alert(1)");
        assert_eq!(render_rich_text(&[item]), "click");
    }

    #[test]
    fn test_page_mention_links_to_page_route() {
        let page_id = PageId::parse("0123456789abcdef0123456789abcdef").unwrap();
        let item = RichTextItem {
            text_type: RichTextType::Mention(MentionType::Page {
                page_id: page_id.clone(),
            }),
            annotations: Annotations::default(),
            plain_text: "Other post".to_string(),
            href: Some("https://www.notion.so/0123456789abcdef0123456789abcdef".to_string()),
        };
        assert_eq!(
            render_rich_text(&[item]),
            r#"<a href="/pages/0123456789abcdef0123456789abcdef">Other post</a>"#
        );
    }

    #[test]
    fn test_date_mention_and_equation() {
        let date = RichTextItem {
            text_type: RichTextType::Mention(MentionType::Date {
                date: DateValue {
                    start: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                    end: None,
                    time_zone: None,
                },
            }),
            annotations: Annotations::default(),
            plain_text: "May 1, 2024".to_string(),
            href: None,
        };
        let equation = RichTextItem {
            text_type: RichTextType::Equation {
                expression: "a<b".to_string(),
            },
            annotations: Annotations::default(),
            plain_text: "a<b".to_string(),
            href: None,
        };

        assert_eq!(
            render_rich_text(&[date, equation]),
            r#"<time datetime="2024-05-01">2024-05-01</time><span class="equation">a&lt;b</span>"#
        );
    }
}
