use validator::Validate;

use crate::errors::AppError;

/// Pagination parameters parsed from their query-string form. Non-numeric,
/// zero and negative values are rejected here, so the paginator never sees a
/// degenerate page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct PageParams {
    #[validate(range(min = 1))]
    pub page: i64,
    #[validate(range(min = 1))]
    pub page_size: i64,
}

impl PageParams {
    pub fn parse(page: &str, page_size: &str) -> Result<Self, AppError> {
        let page = page
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidQuery)?;
        let page_size = page_size
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidQuery)?;

        let params = Self { page, page_size };
        params.validate().map_err(|_| AppError::InvalidQuery)?;
        Ok(params)
    }
}
