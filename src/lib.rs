//! skillscope - skill inventory core for HR teams
//!
//! This library provides the skill-extraction bookkeeping core: departments,
//! employees, a skill taxonomy with aliases, proficiency links, document
//! upload records, and the gap/top-skill/activity reports, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`workforce`): Entities, value objects, and pure services
//! - **Application Layer** (`application`): Use cases, DTOs, and validation
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use skillscope::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let departments = InMemoryDepartmentStore::new();
//!
//! // Create use case with injected dependencies
//! let create = CreateDepartmentUseCase::new(departments.clone());
//!
//! // Execute
//! let outcome = create
//!     .execute(CreateDepartmentCommand {
//!         name: "Engineering".to_string(),
//!     })
//!     .await?;
//!
//! match outcome {
//!     CreateDepartmentOutcome::Created(dto) => println!("created {}", dto.name),
//!     CreateDepartmentOutcome::DuplicateName => println!("name already taken"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod workforce;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::{
        InMemoryDepartmentStore, InMemoryDocumentStore, InMemoryEmployeeSkillStore,
        InMemoryEmployeeStore, InMemoryRequiredSkillStore, InMemorySkillStore,
        InMemoryTaxonomyCache, InMemoryUserDirectory,
    };
    pub use crate::application::dto::{
        DepartmentDto, DocumentDto, EmployeeDto, EmployeeProfileDto, EmployeeSkillDto, PagedResult,
        SkillCountDto, SkillDto, SkillGapDto, UploadActivityDto,
    };
    pub use crate::application::use_cases::*;
    pub use crate::application::validation::{dispatch, Dispatched, ValidateRequest};
    pub use crate::ports::outbound::{
        DepartmentRepository, DirectoryErrorCode, DirectoryResponse, DocumentRepository,
        EmployeeFilter, EmployeeRepository, EmployeeSkillRepository, RequiredSkillRepository,
        SkillRepository, TaxonomyCache, UserDirectory,
    };
    pub use crate::shared::Result;
    pub use crate::workforce::domain::{
        Department, DepartmentId, DepartmentName, Document, DocumentId, DocumentStatus,
        DocumentType, EmailAddress, Employee, EmployeeId, EmployeeSkill, ProficiencyLevel, Role,
        Skill, SkillCategory, SkillId, SkillName,
    };
    pub use crate::workforce::policies::PageRequest;
    pub use crate::workforce::services::{ActivitySeries, DayActivity, GapAnalysis};
}
