pub mod dto;
pub mod use_cases;
pub mod validation;
