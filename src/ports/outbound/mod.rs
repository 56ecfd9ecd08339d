//! Outbound ports (Driven ports) - Infrastructure interfaces
//!
//! These ports define the interfaces the application core uses to reach
//! the persistence collaborator, the taxonomy cache, and the user
//! directory. Implementations live in the adapters layer.

pub mod department_repository;
pub mod document_repository;
pub mod employee_repository;
pub mod employee_skill_repository;
pub mod required_skill_repository;
pub mod skill_repository;
pub mod taxonomy_cache;
pub mod user_directory;

pub use department_repository::DepartmentRepository;
pub use document_repository::DocumentRepository;
pub use employee_repository::{EmployeeFilter, EmployeeRepository};
pub use employee_skill_repository::EmployeeSkillRepository;
pub use required_skill_repository::RequiredSkillRepository;
pub use skill_repository::SkillRepository;
pub use taxonomy_cache::TaxonomyCache;
pub use user_directory::{DirectoryErrorCode, DirectoryResponse, UserDirectory};
