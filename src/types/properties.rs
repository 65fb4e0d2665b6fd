use super::{Color, PageId};
use serde::{Deserialize, Serialize};

/// The kind of rich text content.
///
/// Each variant carries its specific data: there is no "mention" without
/// mention data and no "equation" without an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RichTextType {
    Text { content: String, link: Option<Link> },
    Mention(MentionType),
    Equation { expression: String },
}

/// Rich text item with formatting annotations.
///
/// `plain_text` is the fallback rendering for any variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text_type: RichTextType,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// An unannotated text run.
    pub fn plain_text(text: &str) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// A text run pointing at `url`.
    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: Some(Link {
                    url: url.to_string(),
                }),
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: Some(url.to_string()),
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// Concatenates the plain text of a rich text run.
pub fn plain_text_of(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// What an inline mention points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MentionType {
    Page { page_id: PageId },
    User { name: Option<String> },
    Date { date: DateValue },
    Link { url: String },
    /// Database, template and other mentions render from `plain_text`.
    Other,
}

/// Select option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    pub color: Color,
}

/// Date value with optional end date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: chrono::NaiveDate,
    pub end: Option<chrono::NaiveDate>,
    pub time_zone: Option<String>,
}

/// Formula value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormulaResult {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateValue),
    Empty,
}

impl FormulaResult {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FormulaResult::String(s) => Some(s),
            _ => None,
        }
    }
}
