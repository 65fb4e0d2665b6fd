// src/server/error.rs
//! Error types for the HTTP server.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::config::SiteMeta;
use crate::error::AppError;
use crate::render::render_error;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No post or page at the requested path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Fetching or rendering the content failed.
    #[error(transparent)]
    Upstream(#[from] AppError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PageNotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the visitor is told. Upstream details stay in the log.
    fn public_message(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "This page could not be found.",
            _ => "Something went wrong while loading this page.",
        }
    }
}

/// A `ServerError` rendered through the site's error layout.
#[derive(Debug)]
pub struct ErrorPage {
    error: ServerError,
    site: Arc<SiteMeta>,
}

impl ErrorPage {
    pub fn new(error: ServerError, site: Arc<SiteMeta>) -> Self {
        Self { error, site }
    }

    pub fn error(&self) -> &ServerError {
        &self.error
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let status = self.error.status();
        match &self.error {
            ServerError::PageNotFound(path) => log::info!("404 {}", path),
            ServerError::Upstream(e) if status == StatusCode::NOT_FOUND => {
                log::info!("404 from Notion: {}", e)
            }
            ServerError::Upstream(e) => log::error!("Request failed: {}", e),
        }

        match render_error(&self.site, status.as_u16(), self.error.public_message()) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                log::error!("Failed to render error page: {}", e);
                (status, self.error.public_message()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotionErrorCode;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::PageNotFound("/posts/x".to_string()).status(),
            StatusCode::NOT_FOUND
        );

        let missing = AppError::RemoteApi {
            code: NotionErrorCode::ObjectNotFound,
            status: 404,
            message: "gone".to_string(),
            request_id: None,
        };
        assert_eq!(ServerError::from(missing).status(), StatusCode::NOT_FOUND);

        let limited = AppError::RemoteApi {
            code: NotionErrorCode::RateLimited,
            status: 429,
            message: "slow down".to_string(),
            request_id: None,
        };
        assert_eq!(
            ServerError::from(limited).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
