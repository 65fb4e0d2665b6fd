// src/server/handlers.rs
//! Request handlers. Each request gets its own `BlogSession`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use super::error::{ErrorPage, ServerError};
use super::state::AppState;
use crate::api::BlogSession;
use crate::model::{sort_by_published_desc, Page};
use crate::render::{render_blocks, render_index, render_post, RenderContext};
use crate::types::PageId;

/// Handle GET /.
pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ErrorPage> {
    render_index_page(&state)
        .await
        .map_err(|e| state.error_page(e))
}

/// Handle GET /posts/{slug}.
pub(crate) async fn post_by_slug(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ErrorPage> {
    render_post_by_slug(&state, &slug)
        .await
        .map_err(|e| state.error_page(e))
}

/// Handle GET /pages/{page_id}.
pub(crate) async fn page_by_id(
    Path(page_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ErrorPage> {
    render_page_by_id(&state, &page_id)
        .await
        .map_err(|e| state.error_page(e))
}

/// Handle GET /healthz.
pub(crate) async fn healthz() -> &'static str {
    "ok"
}

async fn render_index_page(state: &AppState) -> Result<Html<String>, ServerError> {
    let session = state.session();
    let mut pages: Vec<Page> = session
        .query_database()
        .await?
        .into_iter()
        .filter(|page| !page.archived)
        .collect();
    sort_by_published_desc(&mut pages);

    Ok(Html(render_index(&state.site, &pages)?))
}

async fn render_post_by_slug(state: &AppState, slug: &str) -> Result<Html<String>, ServerError> {
    let path = format!("/posts/{}", slug);
    let session = state.session();

    let page = session
        .query_page_by_slug(slug)
        .await?
        .ok_or_else(|| ServerError::PageNotFound(path.clone()))?;

    render_page(state, &session, page, &path).await
}

async fn render_page_by_id(state: &AppState, raw_id: &str) -> Result<Html<String>, ServerError> {
    let path = format!("/pages/{}", raw_id);
    let page_id = PageId::parse(raw_id).map_err(|_| ServerError::PageNotFound(path.clone()))?;
    let session = state.session();

    let page = session.retrieve_page(&page_id).await?;
    render_page(state, &session, page, &path).await
}

/// Materializes the page's blocks and renders it in the post layout.
async fn render_page(
    state: &AppState,
    session: &BlogSession,
    mut page: Page,
    path: &str,
) -> Result<Html<String>, ServerError> {
    page.blocks = session.retrieve_block_children(page.id.as_str()).await?;

    let content = render_blocks(&page.blocks, &RenderContext::root())?;
    log::debug!("Rendered {} ({} bytes)", path, content.len());

    Ok(Html(render_post(&state.site, &page, path, &content)?))
}
