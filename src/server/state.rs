// src/server/state.rs
//! Shared state for all request handlers.

use std::sync::Arc;

use crate::api::{BlogSession, NotionRepository};
use crate::config::{ChildrenPaging, SiteMeta};
use crate::types::DatabaseId;

use super::error::{ErrorPage, ServerError};

/// Application state shared across all handlers.
pub struct AppState {
    pub repository: Arc<dyn NotionRepository>,
    pub database_id: DatabaseId,
    pub children_paging: ChildrenPaging,
    pub site: Arc<SiteMeta>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn NotionRepository>,
        database_id: DatabaseId,
        children_paging: ChildrenPaging,
        site: SiteMeta,
    ) -> Self {
        Self {
            repository,
            database_id,
            children_paging,
            site: Arc::new(site),
        }
    }

    /// A fresh session; memoized lookups never outlive the request.
    pub(crate) fn session(&self) -> BlogSession {
        BlogSession::new(
            Arc::clone(&self.repository),
            self.database_id.clone(),
            self.children_paging,
        )
    }

    pub(crate) fn error_page(&self, error: ServerError) -> ErrorPage {
        ErrorPage::new(error, Arc::clone(&self.site))
    }
}
