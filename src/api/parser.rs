// src/api/parser.rs
//! Response parsing through notion-client's serde models.
//!
//! Success bodies are deserialized into wire types and converted to the
//! domain model; error bodies become `AppError::RemoteApi`.

use super::client::ApiResponse;
use super::responses::{
    BlockChildrenResponse, NotionError, NotionPage, QueryDatabaseResponse, ToDomain,
};
use super::types::PaginatedResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Page};

/// Parse any Notion API response using notion-client types
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::Deserialization {
            source: e,
            body: preview(body),
        }
    })
}

/// Builds the error for a non-2xx response, preferring Notion's error body
/// and falling back to the HTTP status.
fn parse_error_body(body: &str, status: reqwest::StatusCode, url: &str) -> AppError {
    match serde_json::from_str::<NotionError>(body) {
        Ok(error) => AppError::RemoteApi {
            code: NotionErrorCode::from_api_response(&error.code),
            status: status.as_u16(),
            message: error.message,
            request_id: error.request_id,
        },
        Err(_) => AppError::RemoteApi {
            code: NotionErrorCode::from_http_status(status.as_u16()),
            status: status.as_u16(),
            message: format!("HTTP {} from {}: {}", status, url, preview(body)),
            request_id: None,
        },
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    let notion_page: NotionPage = parse_api_response(result)?;
    notion_page.to_domain()
}

pub fn parse_pages_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Page>, AppError> {
    let response: QueryDatabaseResponse = parse_api_response(result)?;
    response.to_domain()
}

pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let response: BlockChildrenResponse = parse_api_response(result)?;
    response.to_domain()
}
