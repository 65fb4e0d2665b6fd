// src/api/session.rs
//! Request-scoped access to the blog's Notion content.
//!
//! A `BlogSession` lives for one inbound request. It memoizes page, slug and
//! block-children lookups so a request never asks Notion the same question
//! twice, and it materializes block trees: children are fetched
//! recursively and concurrently, then list items are grouped.

use super::simple_pagination::fetch_all_pages_simple;
use super::types::{DatabaseQuery, PaginatedResponse};
use super::NotionRepository;
use crate::config::ChildrenPaging;
use crate::constants::SLUG_PROPERTY;
use crate::error::AppError;
use crate::model::{group_list_items, Block, Page};
use crate::types::{BlockId, DatabaseId, PageId};
use dashmap::DashMap;
use futures::future::{try_join_all, BoxFuture};
use futures::FutureExt;
use std::sync::Arc;
use std::time::Instant;

pub struct BlogSession {
    repository: Arc<dyn NotionRepository>,
    database_id: DatabaseId,
    children_paging: ChildrenPaging,
    pages: DashMap<PageId, Page>,
    slugs: DashMap<String, Option<Page>>,
    children: DashMap<BlockId, Vec<Block>>,
}

impl BlogSession {
    pub fn new(
        repository: Arc<dyn NotionRepository>,
        database_id: DatabaseId,
        children_paging: ChildrenPaging,
    ) -> Self {
        Self {
            repository,
            database_id,
            children_paging,
            pages: DashMap::new(),
            slugs: DashMap::new(),
            children: DashMap::new(),
        }
    }

    pub fn database_id(&self) -> &DatabaseId {
        &self.database_id
    }

    /// Every row of the blog database, following cursors.
    pub async fn query_database(&self) -> Result<Vec<Page>, AppError> {
        let started = Instant::now();

        let repository = &self.repository;
        let database_id = &self.database_id;
        let result = fetch_all_pages_simple(
            |page_size, cursor| async move {
                let query = DatabaseQuery::page(page_size, cursor);
                repository.query_database(database_id, &query).await
            },
        )
        .await;

        log::info!("[query_database] {}ms", started.elapsed().as_millis());
        Ok(result?.items)
    }

    pub async fn retrieve_page(&self, page_id: &PageId) -> Result<Page, AppError> {
        let started = Instant::now();

        if let Some(page) = self.pages.get(page_id).map(|entry| entry.value().clone()) {
            log::debug!("Page {} served from session memo", page_id);
            return Ok(page);
        }

        let result = self.repository.retrieve_page(page_id).await;
        log::info!("[retrieve_page] {}ms", started.elapsed().as_millis());

        let page = result?;
        self.pages.insert(page_id.clone(), page.clone());
        Ok(page)
    }

    /// The database row whose `Slug` formula equals `slug`, or `None` when
    /// no row matches.
    pub async fn query_page_by_slug(&self, slug: &str) -> Result<Option<Page>, AppError> {
        let started = Instant::now();

        if let Some(hit) = self.slugs.get(slug).map(|entry| entry.value().clone()) {
            log::debug!("Slug '{}' served from session memo", slug);
            return Ok(hit);
        }

        let query = DatabaseQuery::formula_equals(SLUG_PROPERTY, slug);
        let result = self
            .repository
            .query_database(&self.database_id, &query)
            .await;
        log::info!("[query_page_by_slug] {}ms", started.elapsed().as_millis());

        let page = result?.results.into_iter().next();
        if let Some(page) = &page {
            self.pages.insert(page.id.clone(), page.clone());
        }
        self.slugs.insert(slug.to_string(), page.clone());
        Ok(page)
    }

    /// The fully materialized children of `block_id`, which may be given in
    /// dashed or bare form.
    pub async fn retrieve_block_children(&self, block_id: &str) -> Result<Vec<Block>, AppError> {
        let started = Instant::now();

        let id = BlockId::parse(block_id)?;
        let result = self.resolve_children(id).await;

        log::info!(
            "[retrieve_block_children] {}ms",
            started.elapsed().as_millis()
        );
        result
    }

    /// Fetches, recurses and groups. Boxed because it recurses.
    fn resolve_children(&self, id: BlockId) -> BoxFuture<'_, Result<Vec<Block>, AppError>> {
        async move {
            if let Some(cached) = self.children.get(&id).map(|entry| entry.value().clone()) {
                return Ok(cached);
            }

            let blocks = self.list_children(&id).await?;
            let resolved = try_join_all(blocks.into_iter().map(|block| self.attach_children(block)))
                .await?;
            let grouped = group_list_items(&id, resolved);

            self.children.insert(id, grouped.clone());
            Ok(grouped)
        }
        .boxed()
    }

    async fn attach_children(&self, mut block: Block) -> Result<Block, AppError> {
        if block.needs_children() {
            let children = self.resolve_children(block.id().clone()).await?;
            block.set_children(children);
        }
        Ok(block)
    }

    /// Direct children of `id`, in API order.
    async fn list_children(&self, id: &BlockId) -> Result<Vec<Block>, AppError> {
        match self.children_paging {
            ChildrenPaging::FirstPage => {
                let PaginatedResponse {
                    results, has_more, ..
                } = self.repository.list_block_children(id, None).await?;
                if has_more {
                    log::debug!(
                        "Block {} has more than {} children; the rest are not fetched",
                        id,
                        results.len()
                    );
                }
                Ok(results)
            }
            ChildrenPaging::AllPages => {
                let repository = &self.repository;
                let all = fetch_all_pages_simple(
                    |_, cursor| async move {
                        repository.list_block_children(id, cursor.as_deref()).await
                    },
                )
                .await?;
                Ok(all.items)
            }
        }
    }
}
