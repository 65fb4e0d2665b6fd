// src/render/layout.rs
//! Full-page layouts rendered through handlebars.
//!
//! Templates are embedded in the binary and registered once.

use crate::config::SiteMeta;
use crate::error::AppError;
use crate::model::Page;
use handlebars::Handlebars;
use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::json;

const INDEX: &str = "index";
const POST: &str = "post";
const ERROR: &str = "error";

lazy_static! {
    static ref TEMPLATES: Handlebars<'static> =
        build_registry().expect("Embedded templates should always parse");
}

fn build_registry() -> Result<Handlebars<'static>, AppError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(false);

    let register_error = |name: &str, e: handlebars::TemplateError| AppError::TemplateRender {
        name: name.to_string(),
        message: e.to_string(),
    };

    handlebars
        .register_partial("head", include_str!("../../templates/head.hbs"))
        .map_err(|e| register_error("head", e))?;
    for (name, source) in [
        (INDEX, include_str!("../../templates/index.hbs")),
        (POST, include_str!("../../templates/post.hbs")),
        (ERROR, include_str!("../../templates/error.hbs")),
    ] {
        handlebars
            .register_template_string(name, source)
            .map_err(|e| register_error(name, e))?;
    }

    Ok(handlebars)
}

fn render_template<T: Serialize>(name: &str, data: &T) -> Result<String, AppError> {
    TEMPLATES
        .render(name, data)
        .map_err(|e| AppError::TemplateRender {
            name: name.to_string(),
            message: e.to_string(),
        })
}

/// One entry of the post index.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub title: String,
    pub href: String,
    pub published: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

impl PostSummary {
    /// Posts link by slug; rows without one fall back to their page id.
    pub fn from_page(page: &Page) -> Self {
        let href = match page.slug() {
            Some(slug) => format!("/posts/{}", urlencode_path_segment(&slug)),
            None => format!("/pages/{}", page.id),
        };
        Self {
            title: page.title().to_string(),
            href,
            published: page.published().map(|d| d.to_string()),
            summary: page.summary(),
            tags: page.tags().into_iter().map(str::to_string).collect(),
        }
    }
}

fn urlencode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn render_index(site: &SiteMeta, pages: &[Page]) -> Result<String, AppError> {
    let posts: Vec<PostSummary> = pages.iter().map(PostSummary::from_page).collect();
    log::debug!("Rendering index with {} posts", posts.len());

    render_template(
        INDEX,
        &json!({
            "site": site,
            "base_url": site.site_url.base(),
            "path": "/",
            "posts": posts,
        }),
    )
}

/// A post or page with its already-rendered block HTML.
pub fn render_post(
    site: &SiteMeta,
    page: &Page,
    path: &str,
    content_html: &str,
) -> Result<String, AppError> {
    render_template(
        POST,
        &json!({
            "site": site,
            "base_url": site.site_url.base(),
            "path": path,
            "title": page.title().as_str(),
            "description": page.summary(),
            "published": page.published().map(|d| d.to_string()),
            "tags": page.tags(),
            "content": content_html,
        }),
    )
}

pub fn render_error(site: &SiteMeta, status: u16, message: &str) -> Result<String, AppError> {
    render_template(
        ERROR,
        &json!({
            "site": site,
            "base_url": site.site_url.base(),
            "title": status.to_string(),
            "status": status,
            "message": message,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SLUG_PROPERTY;
    use crate::model::PropertyValue;
    use crate::types::{FormulaResult, PageId};

    #[test]
    fn test_index_links_posts_by_slug() {
        let page = Page::new(PageId::new_v4(), "Hello <World>").with_property(
            SLUG_PROPERTY,
            PropertyValue::Formula(FormulaResult::String("hello world".to_string())),
        );

        let html = render_index(&SiteMeta::default(), &[page]).unwrap();

        assert!(html.contains(r#"<a href="/posts/hello%20world">Hello &lt;World&gt;</a>"#));
        assert!(html.contains(r#"<html lang="en-us">"#));
    }

    #[test]
    fn test_post_content_is_not_escaped() {
        let page = Page::new(PageId::new_v4(), "Post");
        let html = render_post(&SiteMeta::default(), &page, "/posts/post", "<p>Body</p>").unwrap();

        assert!(html.contains(r#"<div class="notion"><p>Body</p></div>"#));
        assert!(html.contains("<title>Post | Notion Blogger</title>"));
        assert!(html.contains(r#"content="http://127.0.0.1:3000/posts/post""#));
    }

    #[test]
    fn test_error_page() {
        let html = render_error(&SiteMeta::default(), 404, "Post not found").unwrap();
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains("<p>Post not found</p>"));
    }
}
