use super::blocks::*;
use super::common::BlockCommon;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::BulletedList($pattern) => $result,
            Block::NumberedList($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Equation($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::Bookmark($pattern) => $result,
            Block::ChildPage($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::TableRow($pattern) => $result,
            Block::ColumnList($pattern) => $result,
            Block::Column($pattern) => $result,
            Block::Synced($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// A node of a page's content tree, keyed by block type.
///
/// `BulletedList` and `NumberedList` never come from the API: they are the
/// synthetic containers list grouping wraps consecutive items in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(HeadingBlock),
    Heading2(HeadingBlock),
    Heading3(HeadingBlock),
    BulletedListItem(ListItemBlock),
    NumberedListItem(ListItemBlock),
    BulletedList(ListBlock),
    NumberedList(ListBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Quote(QuoteBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Equation(EquationBlock),
    Divider(DividerBlock),
    Image(ImageBlock),
    Bookmark(BookmarkBlock),
    ChildPage(ChildPageBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    ColumnList(ColumnListBlock),
    Column(ColumnBlock),
    Synced(SyncedBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    pub fn id(&self) -> &BlockId {
        &self.common().id
    }

    /// Resolved children, `None` when never materialized.
    pub fn children(&self) -> Option<&[Block]> {
        self.common().children.as_deref()
    }

    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    pub fn common_mut(&mut self) -> &mut BlockCommon {
        match_all_blocks!(self, b => &mut b.common)
    }

    pub fn set_children(&mut self, children: Vec<Block>) {
        self.common_mut().children = Some(children);
    }

    /// Appends one child, creating the child list if absent.
    pub fn push_child(&mut self, child: Block) {
        let common = self.common_mut();
        common.has_children = true;
        common.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Whether materialization should descend into this block.
    ///
    /// Child pages are linked, never inlined.
    pub fn needs_children(&self) -> bool {
        self.has_children() && !matches!(self, Block::ChildPage(_))
    }

    /// The Notion type tag for this block.
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::BulletedList(_) => "bulleted_list",
            Block::NumberedList(_) => "numbered_list",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Equation(_) => "equation",
            Block::Divider(_) => "divider",
            Block::Image(_) => "image",
            Block::Bookmark(_) => "bookmark",
            Block::ChildPage(_) => "child_page",
            Block::Table(_) => "table",
            Block::TableRow(_) => "table_row",
            Block::ColumnList(_) => "column_list",
            Block::Column(_) => "column",
            Block::Synced(_) => "synced_block",
            Block::Unsupported(b) => &b.block_type,
        }
    }
}
