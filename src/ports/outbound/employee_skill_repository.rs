use crate::shared::Result;
use crate::workforce::domain::{EmployeeId, EmployeeSkill, SkillId};
use async_trait::async_trait;

/// EmployeeSkillRepository port for the employee↔skill join
#[async_trait]
pub trait EmployeeSkillRepository: Send + Sync {
    /// Loads one link, `None` when the employee does not hold the skill
    async fn get(&self, employee_id: EmployeeId, skill_id: SkillId)
        -> Result<Option<EmployeeSkill>>;

    /// Lists all skill links for an employee
    async fn list_for_employee(&self, employee_id: EmployeeId) -> Result<Vec<EmployeeSkill>>;

    /// Lists the ids of employees holding a skill
    async fn employees_with_skill(&self, skill_id: SkillId) -> Result<Vec<EmployeeId>>;

    /// Grouped holder counts per skill, for the top-skills report
    async fn counts_by_skill(&self) -> Result<Vec<(SkillId, u64)>>;

    /// Inserts or replaces the link for (employee, skill)
    async fn upsert(&self, link: EmployeeSkill) -> Result<()>;

    /// Removes a link. Returns `false` when it did not exist.
    async fn remove(&self, employee_id: EmployeeId, skill_id: SkillId) -> Result<bool>;
}
