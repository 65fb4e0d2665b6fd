// src/api/mod.rs
//! Notion API interaction: the ability to read the blog's database, its
//! pages and their block trees.
//!
//! I/O lives in `client`, parsing in `parser`, and the per-request
//! memoization and tree materialization in `session`.

pub mod client;
pub mod notion_client_adapter;
pub mod parser;
mod responses;
pub mod session;
mod simple_pagination;
mod types;

use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{BlockId, DatabaseId, PageId};

/// The ability to read content from a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details. Every
/// method is a single API call; pagination and recursion happen above it.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    async fn query_database(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<PaginatedResponse<Page>, AppError>;

    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError>;

    /// One page (at most `NOTION_API_PAGE_SIZE` blocks) of direct children.
    async fn list_block_children(
        &self,
        parent: &BlockId,
        start_cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError>;
}

pub use client::{ApiResponse, NotionHttpClient};
pub use session::BlogSession;
pub use simple_pagination::fetch_all_pages_simple;
pub use types::{
    DatabaseQuery, FormulaCondition, PaginatedResponse, PaginationResult, PropertyFilter,
    TextCondition,
};
