use crate::workforce::policies::PageRequest;
use serde::Serialize;

/// Paged-result wrapper: one page of items plus the total match count
/// and the effective paging parameters actually used.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, page: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page: page.page(),
            page_size: page.page_size(),
        }
    }
}
