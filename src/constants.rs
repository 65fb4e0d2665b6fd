//! Domain constants that define the operational boundaries of the system.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. Block children are requested with this
/// size and, by default, only the first page is kept.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// API version pinned in the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

// ---------------------------------------------------------------------------
// Blog database schema
// ---------------------------------------------------------------------------

/// Formula property holding the post's URL slug.
pub const SLUG_PROPERTY: &str = "Slug";

/// Date property used as the publication date.
pub const DATE_PROPERTY: &str = "Date";

/// Multi-select property listing the post's tags.
pub const TAGS_PROPERTY: &str = "Tags";

/// Rich text property with the post's teaser, shown on the index.
pub const SUMMARY_PROPERTY: &str = "Summary";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
