// src/lib.rs
//! notion-blogger library: serves a Notion database as a server-rendered
//! blog.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `ServerArgs`, `BlogConfig`, `SiteMeta`, `ChildrenPaging`
//! - **Domain model**: `Page`, `Block` and the block payloads, `group_list_items`
//! - **Domain types**: `PageId`, `BlockId`, `DatabaseId`, `ApiKey`, rich text
//! - **API client**: `NotionRepository`, `NotionHttpClient`, `BlogSession`
//! - **Rendering**: `render_blocks`, `RenderContext`, page layouts
//! - **Server**: `create_router`, `AppState`, `run_server`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod render;
pub mod server;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{BlogConfig, ChildrenPaging, ServerArgs, SiteMeta};

// --- Domain Model ---
pub use crate::model::{
    group_list_items, sort_by_published_desc, Block, BlockCommon, ListKind, Page, PageTitle,
    PropertyValue,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Color, DatabaseId, DateValue, FormulaResult, Link,
    MentionType, PageId, PropertyName, RichTextItem, RichTextType, SelectOption, ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{
    BlogSession, DatabaseQuery, NotionHttpClient, NotionRepository, PaginatedResponse,
};

// --- Rendering ---
pub use crate::render::{render_block, render_blocks, RenderContext};

// --- Server ---
pub use crate::server::{create_router, run_server, AppState};
