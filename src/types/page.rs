use serde::Serialize;

use crate::types::error::AppError;
use crate::utils::links::Link;

/// Paginated envelope: items plus paging metadata and navigational links.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub links: Vec<Link>,
}

pub fn default_page() -> u64 {
    1
}

pub fn default_page_size() -> u64 {
    10
}

// page is 1-based; zero for either value is a caller error caught here,
// before the store or the link builder see it
pub fn check_paging(page: u64, page_size: u64) -> Result<(), AppError> {
    if page == 0 || page_size == 0 {
        return Err(AppError::Validation(
            "page and pageSize must be positive".to_string(),
        ));
    }
    Ok(())
}
