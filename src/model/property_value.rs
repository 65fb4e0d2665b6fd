use crate::types::*;
use serde::{Deserialize, Serialize};

/// A page property value, flattened to what a blog page needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Title(Vec<RichTextItem>),
    RichText(Vec<RichTextItem>),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Status(Option<SelectOption>),
    Date(Option<DateValue>),
    Formula(FormulaResult),
    Checkbox(bool),
    Url(Option<String>),
    CreatedTime(chrono::DateTime<chrono::Utc>),
    LastEditedTime(chrono::DateTime<chrono::Utc>),
    /// People, files, relations, rollups and the rest.
    Unsupported(String),
}

impl PropertyValue {
    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &str {
        match self {
            PropertyValue::Title(_) => "title",
            PropertyValue::RichText(_) => "rich_text",
            PropertyValue::Number(_) => "number",
            PropertyValue::Select(_) => "select",
            PropertyValue::MultiSelect(_) => "multi_select",
            PropertyValue::Status(_) => "status",
            PropertyValue::Date(_) => "date",
            PropertyValue::Formula(_) => "formula",
            PropertyValue::Checkbox(_) => "checkbox",
            PropertyValue::Url(_) => "url",
            PropertyValue::CreatedTime(_) => "created_time",
            PropertyValue::LastEditedTime(_) => "last_edited_time",
            PropertyValue::Unsupported(type_name) => type_name,
        }
    }

    /// The value as display text, where it has one.
    pub fn as_text(&self) -> Option<String> {
        match self {
            PropertyValue::Title(items) | PropertyValue::RichText(items) => {
                Some(plain_text_of(items))
            }
            PropertyValue::Formula(FormulaResult::String(s)) => Some(s.clone()),
            PropertyValue::Select(Some(option)) | PropertyValue::Status(Some(option)) => {
                Some(option.name.clone())
            }
            PropertyValue::Url(Some(url)) => Some(url.clone()),
            _ => None,
        }
    }
}
