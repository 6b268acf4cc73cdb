//! Fallback search query derivation.
//!
//! When a direct related-items lookup is unavailable, a search query is
//! synthesized from the source item's metadata: its first category when it
//! has one, otherwise the leading words of its title.

use crate::models::MediaItem;

/// Maximum number of title words used in a derived query
const TITLE_WORD_LIMIT: usize = 3;

/// Delimiters recognized when splitting a title into words
const TITLE_DELIMITERS: &[char] = &[' ', '-', '.', ',', '!', '?'];

/// Derives a catalog search query from a media item.
///
/// The `subject:` qualifier requires a single token, so whitespace within the
/// category is replaced with underscores.
pub fn fallback_query(item: &MediaItem) -> String {
    if let Some(category) = item.categories.first() {
        let token: String = category
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("subject:{}", token)
    } else {
        first_words(item.title.as_deref().unwrap_or(""), TITLE_WORD_LIMIT)
    }
}

/// Returns the first `limit` delimiter-separated words of `title`, rejoined
/// with single spaces. Titles with fewer words yield all of them.
fn first_words(title: &str, limit: usize) -> String {
    title
        .split(TITLE_DELIMITERS)
        .filter(|word| !word.is_empty())
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
