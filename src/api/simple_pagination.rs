// src/api/simple_pagination.rs
//! Cursor pagination over any list endpoint.

use super::types::{PaginatedResponse, PaginationResult};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;

/// Follows `next_cursor` until the endpoint reports no more results.
pub async fn fetch_all_pages_simple<T, F, Fut>(
    mut fetch_fn: F,
) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(NOTION_API_PAGE_SIZE as u32, cursor).await?;

        cursor = response.next_cursor;
        items.extend(response.results);
        pages_fetched += 1;

        if !response.has_more || cursor.is_none() {
            break;
        }
    }

    Ok(PaginationResult {
        items,
        pages_fetched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(results: Vec<u32>, next_cursor: Option<&str>) -> PaginatedResponse<u32> {
        PaginatedResponse {
            object: "list".to_string(),
            results,
            has_more: next_cursor.is_some(),
            next_cursor: next_cursor.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_follows_cursors_in_order() {
        let mut seen_cursors = Vec::new();
        let result = fetch_all_pages_simple(
            |_, cursor: Option<String>| {
                seen_cursors.push(cursor.clone());
                let response = match cursor.as_deref() {
                    None => page(vec![1, 2], Some("c1")),
                    Some("c1") => page(vec![3], Some("c2")),
                    _ => page(vec![4], None),
                };
                async move { Ok(response) }
            },
        )
        .await
        .unwrap();

        assert_eq!(result.items, vec![1, 2, 3, 4]);
        assert_eq!(result.pages_fetched, 3);
        assert_eq!(
            seen_cursors,
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
    }
}
