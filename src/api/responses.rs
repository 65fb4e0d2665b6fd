// src/api/responses.rs
//! Wire types for Notion API responses, backed by notion-client's serde
//! models, and their conversion into the domain model.

use super::types::PaginatedResponse;
use crate::error::AppError;

pub use notion_client::objects::{
    block::Block as NotionBlock, error::Error as NotionError, page::Page as NotionPage,
};

/// `POST databases/{id}/query` response
pub type QueryDatabaseResponse = PaginatedResponse<NotionPage>;

/// `GET blocks/{id}/children` response
pub type BlockChildrenResponse = PaginatedResponse<NotionBlock>;

/// Conversion from a wire type to its domain counterpart.
pub trait ToDomain<T> {
    fn to_domain(self) -> Result<T, AppError>;
}

impl ToDomain<crate::model::Page> for NotionPage {
    fn to_domain(self) -> Result<crate::model::Page, AppError> {
        super::notion_client_adapter::convert_page(self)
    }
}

impl ToDomain<crate::model::Block> for NotionBlock {
    fn to_domain(self) -> Result<crate::model::Block, AppError> {
        super::notion_client_adapter::convert_block(self)
    }
}

impl<W, D> ToDomain<PaginatedResponse<D>> for PaginatedResponse<W>
where
    W: ToDomain<D>,
{
    fn to_domain(self) -> Result<PaginatedResponse<D>, AppError> {
        Ok(PaginatedResponse {
            object: self.object,
            results: self
                .results
                .into_iter()
                .map(ToDomain::to_domain)
                .collect::<Result<Vec<_>, _>>()?,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        })
    }
}
