use serde::{Deserialize, Serialize};
use std::fmt;

/// Text and background colors Notion attaches to blocks and rich text.
///
/// The `Light*` variants are the `*_background` colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    LightGray,
    LightBrown,
    LightRed,
    LightOrange,
    LightYellow,
    LightGreen,
    LightBlue,
    LightPurple,
    LightPink,
}

impl Color {
    /// The Notion API spelling of the color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::LightGray => "gray_background",
            Color::LightBrown => "brown_background",
            Color::LightRed => "red_background",
            Color::LightOrange => "orange_background",
            Color::LightYellow => "yellow_background",
            Color::LightGreen => "green_background",
            Color::LightBlue => "blue_background",
            Color::LightPurple => "purple_background",
            Color::LightPink => "pink_background",
        }
    }

    pub fn is_background(&self) -> bool {
        self.as_str().ends_with("_background")
    }

    /// Stylesheet class for this color, `None` for the default color.
    pub fn css_class(&self) -> Option<String> {
        match self {
            Color::Default => None,
            other => Some(format!("notion-{}", other.as_str().replace('_', "-"))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes() {
        assert_eq!(Color::Default.css_class(), None);
        assert_eq!(Color::Red.css_class().as_deref(), Some("notion-red"));
        assert_eq!(
            Color::LightBlue.css_class().as_deref(),
            Some("notion-blue-background")
        );
    }

    #[test]
    fn test_background_colors() {
        assert!(!Color::Red.is_background());
        assert!(Color::LightRed.is_background());
    }
}
