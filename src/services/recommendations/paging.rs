//! Derived pagination over unpaginated result sets.
//!
//! The book catalog's associated-volumes endpoint returns every related item
//! in one response, so the page window has to be computed locally.

/// How a total item count is turned into a page count.
///
/// The catalog surface has historically reported `total / page_size` (floor,
/// minimum 1), which undercounts whenever the total is not an exact multiple
/// of the page size. That behavior is kept as the default contract;
/// `RoundingUp` is the corrected formula for callers that opt in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageCounting {
    /// `max(1, total / page_size)`
    #[default]
    Truncating,
    /// `max(1, ceil(total / page_size))`
    RoundingUp,
}

impl PageCounting {
    pub fn page_count(self, total_items: u64, page_size: usize) -> u64 {
        let page_size = page_size as u64;
        let pages = match self {
            PageCounting::Truncating => total_items / page_size,
            PageCounting::RoundingUp => total_items.div_ceil(page_size),
        };
        pages.max(1)
    }
}

/// Extracts the page window `[page * page_size, page * page_size + page_size)`
/// from a full result list, preserving order.
///
/// A page entirely past the end yields an empty list, never an error.
pub fn slice_page<T>(full_list: Vec<T>, page: u32, page_size: usize) -> Vec<T> {
    let start_index = (page as usize).saturating_mul(page_size);
    if start_index >= full_list.len() {
        return Vec::new();
    }

    full_list
        .into_iter()
        .skip(start_index)
        .take(page_size)
        .collect()
}
