//! Order-preserving slicing of an in-memory list into 1-based pages.

/// One page of `items` plus the metadata describing where that page sits in
/// the full list.
///
/// `current_page` and `page_size` are echoed back exactly as given, never
/// clamped or recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub total_items: usize,
    pub current_page: i64,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Compute the `page`-th slice of `items` together with pagination metadata.
///
/// Never fails or goes out of bounds: negative and past-the-end pages clamp
/// to an empty slice, and a `page_size` of zero yields an empty slice with
/// zero total pages. The input is borrowed, not copied or mutated.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> PageSlice<'_, T> {
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let start_raw = page.saturating_sub(1).saturating_mul(page_size as i64);
    let end_raw = start_raw.saturating_add(page_size as i64);
    let start = start_raw.clamp(0, total_items as i64) as usize;
    let end = end_raw.clamp(0, total_items as i64) as usize;

    PageSlice {
        items: &items[start..end],
        total_items,
        current_page: page,
        page_size,
        total_pages,
        has_next_page: end < total_items,
        has_previous_page: page > 1,
    }
}
