//! Request-shaping policies: out-of-range paging, limit, and day-window
//! parameters are clamped to safe defaults rather than rejected.

/// Default page number when the requested one is out of range
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when the requested one is outside [1, MAX_PAGE_SIZE]
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default top-N limit when the requested one is outside (0, MAX_LIMIT]
pub const DEFAULT_LIMIT: usize = 10;

/// Largest top-N limit a caller may request
pub const MAX_LIMIT: usize = 100;

/// Default activity window when the requested one is outside (0, MAX_DAYS]
pub const DEFAULT_DAYS: u32 = 30;

/// Largest activity window a caller may request
pub const MAX_DAYS: u32 = 365;

/// Effective paging parameters after clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Clamps raw caller-supplied paging values.
    ///
    /// Pages below 1 become page 1; page sizes outside [1, 100] become
    /// the default of 20.
    pub fn clamped(page: i32, page_size: i32) -> Self {
        let page = if page < 1 { DEFAULT_PAGE } else { page as u32 };
        let page_size = if (1..=MAX_PAGE_SIZE as i32).contains(&page_size) {
            page_size as u32
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self { page, page_size }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items to skip for this page
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}

/// Clamps a top-N limit: values outside (0, 100] become 10
pub fn effective_limit(limit: i32) -> usize {
    if (1..=MAX_LIMIT as i32).contains(&limit) {
        limit as usize
    } else {
        DEFAULT_LIMIT
    }
}

/// Clamps an activity window: values outside (0, 365] become 30
pub fn effective_days(days: i32) -> u32 {
    if (1..=MAX_DAYS as i32).contains(&days) {
        days as u32
    } else {
        DEFAULT_DAYS
    }
}
