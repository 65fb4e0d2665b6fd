mod block;
pub mod blocks;
pub mod common;
mod list_grouping;
mod property_value;

pub use block::Block;
pub use blocks::*;
pub use common::*;
pub use list_grouping::{group_list_items, ListKind};
pub use property_value::PropertyValue;

use crate::constants::{DATE_PROPERTY, SLUG_PROPERTY, SUMMARY_PROPERTY, TAGS_PROPERTY};
use crate::types::{PageId, PropertyName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A row of the blog database, or any page reachable from one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub url: String,
    pub archived: bool,
    pub properties: HashMap<PropertyName, PropertyValue>,
    /// Root content, empty until materialized.
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(id: PageId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: PageTitle::new(title),
            url: String::new(),
            archived: false,
            properties: HashMap::new(),
            blocks: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: PropertyValue) -> Self {
        self.properties.insert(PropertyName::new(name), value);
        self
    }

    pub fn title(&self) -> &PageTitle {
        &self.title
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The post's URL slug, from the `Slug` formula or text property.
    pub fn slug(&self) -> Option<String> {
        self.property(SLUG_PROPERTY)
            .and_then(PropertyValue::as_text)
            .filter(|slug| !slug.is_empty())
    }

    /// Publication date from the `Date` property.
    pub fn published(&self) -> Option<chrono::NaiveDate> {
        match self.property(DATE_PROPERTY) {
            Some(PropertyValue::Date(Some(date))) => Some(date.start),
            Some(PropertyValue::Formula(crate::types::FormulaResult::Date(date))) => {
                Some(date.start)
            }
            _ => None,
        }
    }

    pub fn tags(&self) -> Vec<&str> {
        match self.property(TAGS_PROPERTY) {
            Some(PropertyValue::MultiSelect(options)) => {
                options.iter().map(|o| o.name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn summary(&self) -> Option<String> {
        self.property(SUMMARY_PROPERTY)
            .and_then(PropertyValue::as_text)
            .filter(|summary| !summary.is_empty())
    }
}

/// Sorts posts newest first; undated posts go last.
pub fn sort_by_published_desc(pages: &mut [Page]) {
    pages.sort_by(|a, b| match (a.published(), b.published()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Page title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, DateValue, FormulaResult, RichTextItem, SelectOption};
    use chrono::NaiveDate;

    fn post(id: &str, date: Option<(i32, u32, u32)>) -> Page {
        let page = Page::new(PageId::parse(id).unwrap(), "Post");
        match date {
            Some((y, m, d)) => page.with_property(
                DATE_PROPERTY,
                PropertyValue::Date(Some(DateValue {
                    start: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                    end: None,
                    time_zone: None,
                })),
            ),
            None => page,
        }
    }

    #[test]
    fn test_slug_from_formula_or_text() {
        let formula = Page::new(PageId::new_v4(), "A").with_property(
            SLUG_PROPERTY,
            PropertyValue::Formula(FormulaResult::String("a-post".to_string())),
        );
        assert_eq!(formula.slug().as_deref(), Some("a-post"));

        let text = Page::new(PageId::new_v4(), "B").with_property(
            SLUG_PROPERTY,
            PropertyValue::RichText(vec![RichTextItem::plain_text("b-post")]),
        );
        assert_eq!(text.slug().as_deref(), Some("b-post"));

        let empty = Page::new(PageId::new_v4(), "C").with_property(
            SLUG_PROPERTY,
            PropertyValue::Formula(FormulaResult::String(String::new())),
        );
        assert_eq!(empty.slug(), None);
    }

    #[test]
    fn test_tags() {
        let page = Page::new(PageId::new_v4(), "Tagged").with_property(
            TAGS_PROPERTY,
            PropertyValue::MultiSelect(vec![
                SelectOption {
                    id: "1".to_string(),
                    name: "rust".to_string(),
                    color: Color::Orange,
                },
                SelectOption {
                    id: "2".to_string(),
                    name: "notion".to_string(),
                    color: Color::Gray,
                },
            ]),
        );
        assert_eq!(page.tags(), vec!["rust", "notion"]);
    }

    #[test]
    fn test_sort_by_published_desc() {
        let mut pages = vec![
            post("00000000000000000000000000000001", Some((2023, 1, 5))),
            post("00000000000000000000000000000002", None),
            post("00000000000000000000000000000003", Some((2024, 3, 1))),
        ];

        sort_by_published_desc(&mut pages);

        let order: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "00000000000000000000000000000003",
                "00000000000000000000000000000001",
                "00000000000000000000000000000002",
            ]
        );
    }
}
