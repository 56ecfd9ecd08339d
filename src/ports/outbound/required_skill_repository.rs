use crate::shared::Result;
use crate::workforce::domain::{DepartmentId, SkillId};
use async_trait::async_trait;

/// RequiredSkillRepository port for the department↔required-skill join
#[async_trait]
pub trait RequiredSkillRepository: Send + Sync {
    /// Whether the link already exists
    async fn exists(&self, department_id: DepartmentId, skill_id: SkillId) -> Result<bool>;

    /// Lists the required skill ids for a department
    async fn list_for_department(&self, department_id: DepartmentId) -> Result<Vec<SkillId>>;

    /// Inserts a link
    ///
    /// # Errors
    /// Returns an error when the link uniqueness constraint is violated.
    async fn insert(&self, department_id: DepartmentId, skill_id: SkillId) -> Result<()>;

    /// Removes a link. Returns `false` when it did not exist.
    async fn remove(&self, department_id: DepartmentId, skill_id: SkillId) -> Result<bool>;

    /// Drops every link for a department (cascade on department delete)
    async fn remove_for_department(&self, department_id: DepartmentId) -> Result<()>;
}
