//! Raw query DTOs for the news routes. Every field is optional at the wire
//! level so that a missing key surfaces as our own 400, not an extractor
//! rejection.

use serde::Deserialize;
use validator::Validate;

use crate::domain::news::dto::news_query::{
    HeadlinesQuery, SearchQuery, DEFAULT_PAGE, HEADLINES_DEFAULT_PAGE_SIZE,
    SEARCH_DEFAULT_PAGE_SIZE,
};
use crate::errors::AppError;

#[derive(Deserialize, Debug, Default, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadlinesQueryDto {
    #[validate(required)]
    pub category: Option<String>,
    #[validate(required)]
    pub country: Option<String>,
    #[validate(required)]
    pub language: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Deserialize, Debug, Default, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQueryDto {
    #[validate(required)]
    pub query: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl HeadlinesQueryDto {
    /// Check required keys and apply defaults. Which field failed is not
    /// reported; the route answers with one generic 400.
    pub fn validated(self) -> Result<HeadlinesQuery, AppError> {
        self.validate().map_err(|_| AppError::InvalidQuery)?;

        Ok(HeadlinesQuery {
            category: self.category.ok_or(AppError::InvalidQuery)?,
            country: self.country.ok_or(AppError::InvalidQuery)?,
            language: self.language.ok_or(AppError::InvalidQuery)?,
            page: self.page.unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            page_size: self
                .page_size
                .unwrap_or_else(|| HEADLINES_DEFAULT_PAGE_SIZE.to_string()),
        })
    }
}

impl SearchQueryDto {
    pub fn validated(self) -> Result<SearchQuery, AppError> {
        self.validate().map_err(|_| AppError::InvalidQuery)?;

        Ok(SearchQuery {
            query: self.query.ok_or(AppError::InvalidQuery)?,
            country: self.country,
            language: self.language,
            page: self.page.unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            page_size: self
                .page_size
                .unwrap_or_else(|| SEARCH_DEFAULT_PAGE_SIZE.to_string()),
        })
    }
}
