//! Cover image URL construction.

#[cfg(test)]
#[path = "cover_test.rs"]
mod cover_test;

use crate::config::{COVER_CDN_BASE, COVER_SIZE_MEDIUM, PLACEHOLDER_COVER_URL};

/// Medium-size cover URL for `cover_id`, or the placeholder when absent.
pub fn cover_url(cover_id: Option<i64>) -> String {
    match cover_id {
        Some(id) => format!("{COVER_CDN_BASE}/{id}-{COVER_SIZE_MEDIUM}.jpg"),
        None => PLACEHOLDER_COVER_URL.to_owned(),
    }
}
