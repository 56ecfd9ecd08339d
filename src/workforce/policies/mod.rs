pub mod paging;

pub use paging::{effective_days, effective_limit, PageRequest};
