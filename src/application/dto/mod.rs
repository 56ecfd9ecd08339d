//! Response DTOs returned to the boundary. Flat shapes, serializable for
//! the CLI's JSON output; no domain behavior.

pub mod analytics;
pub mod department;
pub mod document;
pub mod employee;
pub mod paged;
pub mod skill;

pub use analytics::{SkillCountDto, SkillGapDto, UploadActivityDto};
pub use department::DepartmentDto;
pub use document::DocumentDto;
pub use employee::{EmployeeDto, EmployeeProfileDto, EmployeeSkillDto};
pub use paged::PagedResult;
pub use skill::SkillDto;
