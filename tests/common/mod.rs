// tests/common/mod.rs
//! Shared fixtures: an in-memory `NotionRepository` and block builders.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use notion_blogger::api::{DatabaseQuery, NotionRepository, PaginatedResponse};
use notion_blogger::error::NotionErrorCode;
use notion_blogger::model::{
    Block, BlockCommon, ChildPageBlock, ListItemBlock, ParagraphBlock, SyncedBlock, SyncedFrom,
    TableBlock, TableRowBlock, TextBlockContent,
};
use notion_blogger::types::{BlockId, DatabaseId, FormulaResult, PageId, RichTextItem};
use notion_blogger::{AppError, Page, PropertyValue};

/// Notion-shaped ids built from a small number, so tests read `id(3)`.
pub fn raw_id(n: u32) -> String {
    format!("{:032x}", n)
}

pub fn id(n: u32) -> BlockId {
    BlockId::parse(&raw_id(n)).unwrap()
}

pub fn page_id(n: u32) -> PageId {
    PageId::parse(&raw_id(n)).unwrap()
}

pub fn database_id() -> DatabaseId {
    DatabaseId::parse("d9824bdc84454327be8b5b47500af6ce").unwrap()
}

pub fn not_found(message: &str) -> AppError {
    AppError::RemoteApi {
        code: NotionErrorCode::ObjectNotFound,
        status: 404,
        message: message.to_string(),
        request_id: None,
    }
}

pub fn rate_limited() -> AppError {
    AppError::RemoteApi {
        code: NotionErrorCode::RateLimited,
        status: 429,
        message: "slow down".to_string(),
        request_id: None,
    }
}

/// In-memory workspace. Records every call so tests can assert on traffic.
#[derive(Default)]
pub struct MockRepository {
    pages: Vec<Page>,
    children: HashMap<BlockId, Vec<Vec<Block>>>,
    failing: HashMap<BlockId, NotionErrorCode>,
    database_failure: Mutex<Option<AppError>>,
    pub page_calls: AtomicUsize,
    pub query_calls: AtomicUsize,
    pub children_calls: Mutex<Vec<(BlockId, Option<String>)>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Children of `parent`, served as a single page.
    pub fn with_children(self, parent: BlockId, children: Vec<Block>) -> Self {
        self.with_children_pages(parent, vec![children])
    }

    /// Children of `parent`, served across several cursor pages.
    pub fn with_children_pages(mut self, parent: BlockId, pages: Vec<Vec<Block>>) -> Self {
        self.children.insert(parent, pages);
        self
    }

    pub fn failing_children(mut self, parent: BlockId, code: NotionErrorCode) -> Self {
        self.failing.insert(parent, code);
        self
    }

    pub fn failing_database(self, error: AppError) -> Self {
        *self.database_failure.lock().unwrap() = Some(error);
        self
    }

    pub fn children_calls_for(&self, parent: &BlockId) -> usize {
        self.children_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| id == parent)
            .count()
    }

    pub fn total_children_calls(&self) -> usize {
        self.children_calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl NotionRepository for MockRepository {
    async fn query_database(
        &self,
        _database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<PaginatedResponse<Page>, AppError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.database_failure.lock().unwrap().take() {
            return Err(error);
        }

        let results = match query.equals_value() {
            Some(slug) => self
                .pages
                .iter()
                .filter(|page| page.slug().as_deref() == Some(slug))
                .take(1)
                .cloned()
                .collect(),
            None => self.pages.clone(),
        };
        Ok(PaginatedResponse::complete(results))
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .iter()
            .find(|page| &page.id == id)
            .cloned()
            .ok_or_else(|| not_found(&format!("Could not find page with ID: {}", id)))
    }

    async fn list_block_children(
        &self,
        parent: &BlockId,
        start_cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        self.children_calls
            .lock()
            .unwrap()
            .push((parent.clone(), start_cursor.map(str::to_string)));

        if let Some(code) = self.failing.get(parent) {
            return Err(AppError::RemoteApi {
                code: code.clone(),
                status: 500,
                message: format!("children of {} failed", parent),
                request_id: None,
            });
        }

        let pages = self.children.get(parent).cloned().unwrap_or_default();
        let index: usize = start_cursor.and_then(|c| c.parse().ok()).unwrap_or(0);
        let results = pages.get(index).cloned().unwrap_or_default();
        let has_more = index + 1 < pages.len();

        Ok(PaginatedResponse {
            object: "list".to_string(),
            results,
            next_cursor: has_more.then(|| (index + 1).to_string()),
            has_more,
        })
    }
}

// --- Block builders ---

pub fn paragraph(n: u32, text: &str) -> Block {
    Block::Paragraph(ParagraphBlock {
        common: BlockCommon::new(id(n)),
        content: TextBlockContent::plain(text),
    })
}

/// A paragraph whose children still live on the remote side.
pub fn paragraph_with_remote_children(n: u32, text: &str) -> Block {
    Block::Paragraph(ParagraphBlock {
        common: BlockCommon::new(id(n)).with_remote_children(),
        content: TextBlockContent::plain(text),
    })
}

pub fn bulleted(n: u32, text: &str) -> Block {
    Block::BulletedListItem(ListItemBlock {
        common: BlockCommon::new(id(n)),
        content: TextBlockContent::plain(text),
    })
}

pub fn numbered(n: u32, text: &str) -> Block {
    Block::NumberedListItem(ListItemBlock {
        common: BlockCommon::new(id(n)),
        content: TextBlockContent::plain(text),
    })
}

pub fn child_page(n: u32, title: &str) -> Block {
    Block::ChildPage(ChildPageBlock {
        common: BlockCommon::new(id(n)).with_remote_children(),
        title: title.to_string(),
    })
}

pub fn synced(n: u32, synced_from: Option<u32>, children: Option<Vec<Block>>) -> Block {
    let common = BlockCommon::new(id(n));
    Block::Synced(SyncedBlock {
        common: match children {
            Some(children) => common.with_children(children),
            None => common.with_remote_children(),
        },
        synced_from: synced_from.map(|n| SyncedFrom { block_id: id(n) }),
    })
}

pub fn table_row(n: u32, cells: &[&str]) -> Block {
    Block::TableRow(TableRowBlock {
        common: BlockCommon::new(id(n)),
        cells: cells
            .iter()
            .map(|text| vec![RichTextItem::plain_text(text)])
            .collect(),
    })
}

pub fn table(n: u32, has_column_header: bool, has_row_header: bool, rows: Vec<Block>) -> Block {
    Block::Table(TableBlock {
        common: BlockCommon::new(id(n)).with_children(rows),
        table_width: 2,
        has_column_header,
        has_row_header,
    })
}

// --- Page builders ---

pub fn post(n: u32, title: &str, slug: &str) -> Page {
    Page::new(page_id(n), title).with_property(
        "Slug",
        PropertyValue::Formula(FormulaResult::String(slug.to_string())),
    )
}
