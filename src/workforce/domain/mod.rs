pub mod department;
pub mod document;
pub mod employee;
pub mod employee_skill;
pub mod ids;
pub mod skill;

pub use department::{Department, DepartmentName};
pub use document::{Document, DocumentStatus, DocumentType};
pub use employee::{EmailAddress, Employee, Role};
pub use employee_skill::{EmployeeSkill, ProficiencyLevel};
pub use ids::{DepartmentId, DocumentId, EmployeeId, SkillId};
pub use skill::{Skill, SkillCategory, SkillName};
