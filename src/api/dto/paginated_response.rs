use serde::Serialize;

use crate::core::util::pagination::PageSlice;
use crate::domain::news::model::article::Article;

/// Final response body for both news routes: the page slice under `articles`
/// with the pagination metadata flattened alongside it.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesPage {
    pub articles: Vec<Article>,
    pub total_items: usize,
    pub current_page: i64,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl From<PageSlice<'_, Article>> for ArticlesPage {
    fn from(slice: PageSlice<'_, Article>) -> Self {
        Self {
            articles: slice.items.to_vec(),
            total_items: slice.total_items,
            current_page: slice.current_page,
            page_size: slice.page_size,
            total_pages: slice.total_pages,
            has_next_page: slice.has_next_page,
            has_previous_page: slice.has_previous_page,
        }
    }
}
