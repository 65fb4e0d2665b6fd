// src/api/types.rs
//! Request and response shapes shared by the API client and its callers.

use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// A single, final page holding `results`.
    pub fn complete(results: Vec<T>) -> Self {
        Self {
            object: "list".to_string(),
            results,
            next_cursor: None,
            has_more: false,
        }
    }
}

/// Items gathered across every page of a paginated endpoint.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
}

/// Body of `POST databases/{id}/query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<PropertyFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl DatabaseQuery {
    /// Rows whose `property` formula evaluates to exactly `value`, first
    /// match only.
    pub fn formula_equals(property: &str, value: &str) -> Self {
        Self {
            filter: Some(PropertyFilter {
                property: property.to_string(),
                formula: FormulaCondition::String(TextCondition::Equals(value.to_string())),
            }),
            page_size: Some(1),
            start_cursor: None,
        }
    }

    pub fn page(page_size: u32, start_cursor: Option<String>) -> Self {
        Self {
            filter: None,
            page_size: Some(page_size),
            start_cursor,
        }
    }

    /// The value an equality filter compares against, if this query has one.
    pub fn equals_value(&self) -> Option<&str> {
        match &self.filter {
            Some(PropertyFilter {
                formula: FormulaCondition::String(TextCondition::Equals(value)),
                ..
            }) => Some(value),
            None => None,
        }
    }
}

/// A filter on one formula property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyFilter {
    pub property: String,
    pub formula: FormulaCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaCondition {
    String(TextCondition),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCondition {
    Equals(String),
}
