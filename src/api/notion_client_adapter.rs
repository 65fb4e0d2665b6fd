// src/api/notion_client_adapter.rs
//! Adapter layer for converting notion-client types to the blog's domain
//! model.
//!
//! Block types the renderers have no markup for become
//! `Block::Unsupported` carrying the API's type name.

use crate::error::AppError;
use crate::model::blocks::*;
use crate::model::common::BlockCommon;
use crate::model::{Block, Page, PageTitle, PropertyValue};
use crate::types::{
    Annotations, BlockId, Color, DateValue, FormulaResult, Link, MentionType, PageId,
    PropertyName, RichTextItem, RichTextType, SelectOption,
};
use std::collections::HashMap;

use notion_client::objects::block::BlockType;
use notion_client::objects::page::PageProperty;
use notion_client::objects::rich_text::RichText as NcRichText;

/// Convert notion-client Page to our domain Page
pub fn convert_page(notion_page: notion_client::objects::page::Page) -> Result<Page, AppError> {
    let id = PageId::parse(&notion_page.id)?;
    let title = extract_page_title(&notion_page.properties)?;

    Ok(Page {
        id,
        title,
        url: notion_page.url,
        archived: notion_page.archived,
        properties: convert_page_properties(notion_page.properties),
        blocks: Vec::new(),
    })
}

/// Convert notion-client Block to our domain Block
pub fn convert_block(
    notion_block: notion_client::objects::block::Block,
) -> Result<Block, AppError> {
    let common = convert_block_common(&notion_block)?;

    let block = match notion_block.block_type {
        BlockType::Paragraph { paragraph } => Block::Paragraph(ParagraphBlock {
            common,
            content: convert_text_block_content(paragraph.rich_text, paragraph.color)?,
        }),

        BlockType::Heading1 { heading_1 } => Block::Heading1(HeadingBlock {
            is_toggleable: common.has_children,
            common,
            content: convert_text_block_content(heading_1.rich_text, heading_1.color)?,
        }),

        BlockType::Heading2 { heading_2 } => Block::Heading2(HeadingBlock {
            is_toggleable: common.has_children,
            common,
            content: convert_text_block_content(heading_2.rich_text, heading_2.color)?,
        }),

        BlockType::Heading3 { heading_3 } => Block::Heading3(HeadingBlock {
            is_toggleable: common.has_children,
            common,
            content: convert_text_block_content(heading_3.rich_text, heading_3.color)?,
        }),

        BlockType::BulletedListItem { bulleted_list_item } => {
            Block::BulletedListItem(ListItemBlock {
                common,
                content: convert_text_block_content(
                    bulleted_list_item.rich_text,
                    Some(bulleted_list_item.color),
                )?,
            })
        }

        BlockType::NumberedListItem { numbered_list_item } => {
            Block::NumberedListItem(ListItemBlock {
                common,
                content: convert_text_block_content(
                    numbered_list_item.rich_text,
                    Some(numbered_list_item.color),
                )?,
            })
        }

        BlockType::ToDo { to_do } => Block::ToDo(ToDoBlock {
            common,
            content: convert_text_block_content(to_do.rich_text, to_do.color)?,
            checked: to_do.checked.unwrap_or(false),
        }),

        BlockType::Toggle { toggle } => Block::Toggle(ToggleBlock {
            common,
            content: convert_text_block_content(toggle.rich_text, Some(toggle.color))?,
        }),

        BlockType::Quote { quote } => Block::Quote(QuoteBlock {
            common,
            content: convert_text_block_content(quote.rich_text, Some(quote.color))?,
        }),

        BlockType::Callout { callout } => Block::Callout(CalloutBlock {
            common,
            icon: callout.icon.map(convert_icon),
            content: convert_text_block_content(callout.rich_text, Some(callout.color))?,
        }),

        BlockType::Code { code } => Block::Code(CodeBlock {
            common,
            language: snake_case(&format!("{:?}", code.language)),
            caption: convert_rich_text_array(code.caption)?,
            content: convert_text_block_content(code.rich_text, None)?,
        }),

        BlockType::Equation { equation } => Block::Equation(EquationBlock {
            common,
            expression: equation.expression,
        }),

        BlockType::Divider { .. } => Block::Divider(DividerBlock { common }),

        BlockType::Image { image } => Block::Image(ImageBlock {
            common,
            image: convert_file_object(image.file_type),
            // notion-client's ImageValue carries no caption
            caption: Vec::new(),
        }),

        BlockType::Bookmark { bookmark } => Block::Bookmark(BookmarkBlock {
            common,
            url: bookmark.url,
            caption: convert_rich_text_array(bookmark.caption)?,
        }),

        BlockType::ChildPage { child_page } => Block::ChildPage(ChildPageBlock {
            common,
            title: child_page.title,
        }),

        BlockType::Table { table } => Block::Table(TableBlock {
            common,
            table_width: table.table_width as usize,
            has_column_header: table.has_column_header,
            has_row_header: table.has_row_header,
        }),

        BlockType::TableRow { table_row } => Block::TableRow(TableRowBlock {
            common,
            cells: table_row
                .cells
                .into_iter()
                .map(convert_rich_text_array)
                .collect::<Result<Vec<_>, _>>()?,
        }),

        BlockType::ColumnList { .. } => Block::ColumnList(ColumnListBlock { common }),

        BlockType::Column { .. } => Block::Column(ColumnBlock { common }),

        BlockType::SyncedBlock { synced_block } => {
            let synced_from = match synced_block.synced_from {
                Some(notion_client::objects::block::SyncedFrom::BlockId { block_id }) => {
                    Some(SyncedFrom {
                        block_id: BlockId::parse(&block_id)?,
                    })
                }
                None => None,
            };
            Block::Synced(SyncedBlock {
                common,
                synced_from,
            })
        }

        other => Block::Unsupported(UnsupportedBlock {
            common,
            block_type: block_type_name(&other),
        }),
    };

    Ok(block)
}

/// The API's snake_case type name, recovered from the variant name.
fn block_type_name(block_type: &BlockType) -> String {
    let debug = format!("{:?}", block_type);
    let variant = debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    snake_case(variant)
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn convert_block_common(
    notion_block: &notion_client::objects::block::Block,
) -> Result<BlockCommon, AppError> {
    let raw_id = notion_block
        .id
        .as_deref()
        .ok_or_else(|| AppError::MalformedResponse("Block missing required ID field".into()))?;

    let mut common = BlockCommon::new(BlockId::parse(raw_id)?);
    common.has_children = notion_block.has_children.unwrap_or(false);
    common.archived = notion_block.archived.unwrap_or(false);
    Ok(common)
}

fn convert_text_block_content(
    rich_text: Vec<NcRichText>,
    color: Option<notion_client::objects::block::TextColor>,
) -> Result<TextBlockContent, AppError> {
    Ok(TextBlockContent {
        rich_text: convert_rich_text_array(rich_text)?,
        color: color.map(convert_block_color).unwrap_or_default(),
    })
}

fn convert_rich_text_array(rich_texts: Vec<NcRichText>) -> Result<Vec<RichTextItem>, AppError> {
    rich_texts.into_iter().map(convert_rich_text).collect()
}

fn convert_rich_text(rich_text: NcRichText) -> Result<RichTextItem, AppError> {
    match rich_text {
        NcRichText::Text {
            text,
            annotations,
            plain_text,
            href,
        } => Ok(RichTextItem {
            plain_text: plain_text.unwrap_or_else(|| text.content.clone()),
            text_type: RichTextType::Text {
                content: text.content,
                link: text.link.map(|link| Link { url: link.url }),
            },
            annotations: convert_annotations(annotations.unwrap_or_default()),
            href,
        }),

        NcRichText::Mention {
            mention,
            annotations,
            plain_text,
            href,
        } => {
            let mention = convert_mention(mention, href.as_deref());
            Ok(RichTextItem {
                text_type: RichTextType::Mention(mention),
                annotations: convert_annotations(annotations),
                plain_text,
                href,
            })
        }

        NcRichText::Equation {
            equation,
            annotations,
            plain_text,
            href,
        } => Ok(RichTextItem {
            text_type: RichTextType::Equation {
                expression: equation.expression,
            },
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        }),

        _ => {
            log::debug!("Unsupported rich text type, rendering as empty text");
            Ok(RichTextItem::plain_text(""))
        }
    }
}

fn convert_annotations(annotations: notion_client::objects::rich_text::Annotations) -> Annotations {
    Annotations {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        underline: annotations.underline,
        code: annotations.code,
        color: convert_rich_text_color(annotations.color),
    }
}

/// Mentions the renderer has no special markup for fall back to the
/// item's href, or to `Other` when there is none.
fn convert_mention(
    mention: notion_client::objects::rich_text::Mention,
    href: Option<&str>,
) -> MentionType {
    use notion_client::objects::rich_text::Mention as NcMention;

    match mention {
        NcMention::Page { page } => match PageId::parse(&page.id) {
            Ok(page_id) => MentionType::Page { page_id },
            Err(e) => {
                log::warn!("Page mention with invalid ID '{}': {}", page.id, e);
                MentionType::Other
            }
        },
        NcMention::User { user } => MentionType::User { name: user.name },
        NcMention::Date { date } => MentionType::Date {
            date: DateValue {
                start: date.start.naive_utc().date(),
                end: date.end.map(|end| end.naive_utc().date()),
                time_zone: date.time_zone,
            },
        },
        NcMention::LinkPreview { link_preview } => MentionType::Link {
            url: link_preview.url,
        },
        _ => match href {
            Some(url) => MentionType::Link {
                url: url.to_string(),
            },
            None => MentionType::Other,
        },
    }
}

fn convert_file_object(file: notion_client::objects::file::File) -> FileObject {
    use notion_client::objects::file::File as NcFile;

    match file {
        NcFile::External { external } => FileObject::External {
            external: ExternalFile { url: external.url },
        },
        NcFile::File { file } => FileObject::File {
            file: NotionFile {
                url: file.url,
                expiry_time: Some(file.expiry_time),
            },
        },
    }
}

fn convert_icon(icon: notion_client::objects::block::Icon) -> Icon {
    use notion_client::objects::block::Icon as NcIcon;

    match icon {
        NcIcon::Emoji(notion_client::objects::emoji::Emoji::Emoji { emoji }) => {
            Icon::Emoji { emoji }
        }
        NcIcon::File(file) => match convert_file_object(file) {
            FileObject::File { file } => Icon::File { file },
            FileObject::External { external } => Icon::External { external },
        },
    }
}

/// Generates a conversion from a Notion color enum to our `Color`.
/// The `with_backgrounds` form maps `*Background` variants to `Light*`.
macro_rules! impl_color_conversion {
    ($fn_name:ident, $source:ty) => {
        fn $fn_name(color: $source) -> Color {
            match color {
                <$source>::Default => Color::Default,
                <$source>::Gray => Color::Gray,
                <$source>::Brown => Color::Brown,
                <$source>::Orange => Color::Orange,
                <$source>::Yellow => Color::Yellow,
                <$source>::Green => Color::Green,
                <$source>::Blue => Color::Blue,
                <$source>::Purple => Color::Purple,
                <$source>::Pink => Color::Pink,
                <$source>::Red => Color::Red,
            }
        }
    };
    ($fn_name:ident, $source:ty, with_backgrounds) => {
        fn $fn_name(color: $source) -> Color {
            match color {
                <$source>::Default => Color::Default,
                <$source>::Gray => Color::Gray,
                <$source>::Brown => Color::Brown,
                <$source>::Orange => Color::Orange,
                <$source>::Yellow => Color::Yellow,
                <$source>::Green => Color::Green,
                <$source>::Blue => Color::Blue,
                <$source>::Purple => Color::Purple,
                <$source>::Pink => Color::Pink,
                <$source>::Red => Color::Red,
                <$source>::GrayBackground => Color::LightGray,
                <$source>::BrownBackground => Color::LightBrown,
                <$source>::OrangeBackground => Color::LightOrange,
                <$source>::YellowBackground => Color::LightYellow,
                <$source>::GreenBackground => Color::LightGreen,
                <$source>::BlueBackground => Color::LightBlue,
                <$source>::PurpleBackground => Color::LightPurple,
                <$source>::PinkBackground => Color::LightPink,
                <$source>::RedBackground => Color::LightRed,
            }
        }
    };
}

impl_color_conversion!(
    convert_block_color,
    notion_client::objects::block::TextColor,
    with_backgrounds
);
impl_color_conversion!(
    convert_rich_text_color,
    notion_client::objects::rich_text::TextColor,
    with_backgrounds
);
impl_color_conversion!(convert_page_property_color, notion_client::objects::page::Color);

fn extract_page_title(
    properties: &HashMap<String, PageProperty>,
) -> Result<PageTitle, AppError> {
    for property in properties.values() {
        if let PageProperty::Title { title, .. } = property {
            let items = convert_rich_text_array(title.clone())?;
            return Ok(PageTitle::new(crate::types::plain_text_of(&items)));
        }
    }
    Ok(PageTitle::new("Untitled"))
}

/// Properties that fail to convert are logged and skipped.
fn convert_page_properties(
    properties: HashMap<String, PageProperty>,
) -> HashMap<PropertyName, PropertyValue> {
    let mut converted = HashMap::with_capacity(properties.len());

    for (name, property) in properties {
        match convert_page_property(property) {
            Ok(value) => {
                converted.insert(PropertyName::new(name), value);
            }
            Err(e) => {
                log::warn!(
                    "Failed to convert page property '{}': {}. Skipping.",
                    name,
                    e
                );
            }
        }
    }

    converted
}

fn resolve_date(dod: notion_client::objects::page::DateOrDateTime) -> chrono::NaiveDate {
    match dod {
        notion_client::objects::page::DateOrDateTime::Date(d) => d,
        notion_client::objects::page::DateOrDateTime::DateTime(dt) => dt.date_naive(),
    }
}

/// A date without a start is no date at all.
fn convert_notion_date(d: notion_client::objects::page::DatePropertyValue) -> Option<DateValue> {
    Some(DateValue {
        start: resolve_date(d.start?),
        end: d.end.map(resolve_date),
        time_zone: d.time_zone,
    })
}

fn convert_select_option(s: notion_client::objects::page::SelectPropertyValue) -> SelectOption {
    SelectOption {
        id: s.id.unwrap_or_default(),
        name: s.name.unwrap_or_default(),
        color: convert_page_property_color(
            s.color
                .unwrap_or(notion_client::objects::page::Color::Default),
        ),
    }
}

fn convert_formula_value(
    formula: Option<notion_client::objects::page::FormulaPropertyValue>,
) -> FormulaResult {
    use notion_client::objects::page::FormulaPropertyValue;

    match formula {
        Some(FormulaPropertyValue::String { string }) => match string {
            Some(s) => FormulaResult::String(s),
            None => FormulaResult::Empty,
        },
        Some(FormulaPropertyValue::Number { number }) => number
            .and_then(|n| n.as_f64())
            .map(FormulaResult::Number)
            .unwrap_or(FormulaResult::Empty),
        Some(FormulaPropertyValue::Boolean { boolean }) => FormulaResult::Boolean(boolean),
        Some(FormulaPropertyValue::Date { date }) => date
            .and_then(convert_notion_date)
            .map(FormulaResult::Date)
            .unwrap_or(FormulaResult::Empty),
        None => FormulaResult::Empty,
    }
}

fn convert_page_property(property: PageProperty) -> Result<PropertyValue, AppError> {
    let value = match property {
        PageProperty::Title { title, .. } => PropertyValue::Title(convert_rich_text_array(title)?),
        PageProperty::RichText { rich_text, .. } => {
            PropertyValue::RichText(convert_rich_text_array(rich_text)?)
        }
        PageProperty::Number { number, .. } => {
            PropertyValue::Number(number.and_then(|n| n.as_f64()))
        }
        PageProperty::Select { select, .. } => {
            PropertyValue::Select(select.map(convert_select_option))
        }
        PageProperty::MultiSelect { multi_select, .. } => PropertyValue::MultiSelect(
            multi_select
                .into_iter()
                .map(convert_select_option)
                .collect(),
        ),
        PageProperty::Status { status, .. } => {
            PropertyValue::Status(status.map(convert_select_option))
        }
        PageProperty::Date { date, .. } => PropertyValue::Date(date.and_then(convert_notion_date)),
        PageProperty::Formula { formula, .. } => {
            PropertyValue::Formula(convert_formula_value(formula))
        }
        PageProperty::Checkbox { checkbox, .. } => PropertyValue::Checkbox(checkbox),
        PageProperty::Url { url, .. } => PropertyValue::Url(url),
        PageProperty::CreatedTime { created_time, .. } => {
            PropertyValue::CreatedTime(created_time)
        }
        PageProperty::LastEditedTime {
            last_edited_time, ..
        } => PropertyValue::LastEditedTime(last_edited_time.unwrap_or_default()),
        other => PropertyValue::Unsupported(property_type_name(&other)),
    };

    Ok(value)
}

fn property_type_name(property: &PageProperty) -> String {
    let debug = format!("{:?}", property);
    let variant = debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    snake_case(variant)
}
