//! Fixed endpoints used by the browser UI.
//!
//! The client runs in the browser and reads no environment; these are
//! compile-time constants.

/// Catalog title-search endpoint. The query goes in the `title` parameter.
pub const CATALOG_SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Cover CDN prefix; a cover URL is `{COVER_CDN_BASE}/{id}-{size}.jpg`.
pub const COVER_CDN_BASE: &str = "https://covers.openlibrary.org/b/id";

/// Medium size suffix on the cover CDN.
pub const COVER_SIZE_MEDIUM: &str = "M";

/// Image shown for records without a cover identifier.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/128x192?text=No+Cover";
