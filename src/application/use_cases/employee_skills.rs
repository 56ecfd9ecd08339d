//! Proficiency corrections on the employee↔skill links.
//!
//! Both operations here are human corrections to extracted data, so each
//! one emits an audit record via the `audit` tracing target.

use crate::application::validation::{require_in_range, ValidateRequest, ValidationFailure};
use crate::ports::outbound::{EmployeeRepository, EmployeeSkillRepository, SkillRepository};
use crate::shared::Result;
use crate::workforce::domain::{EmployeeId, EmployeeSkill, ProficiencyLevel, SkillId};
use chrono::Utc;

/// Command to set an employee's proficiency for one skill
#[derive(Debug, Clone)]
pub struct SetProficiencyCommand {
    pub actor_id: EmployeeId,
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
    pub level: u8,
}

impl ValidateRequest for SetProficiencyCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        require_in_range(
            &mut failure,
            "level",
            self.level,
            ProficiencyLevel::MIN,
            ProficiencyLevel::MAX,
        );
        failure.into_result()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SetProficiencyOutcome {
    Set,
    EmployeeNotFound,
    SkillNotFound,
}

/// Sets a proficiency level as a manual override.
///
/// Creates the link when the employee does not hold the skill yet;
/// either way the link ends up flagged as manually overridden so the
/// extraction engine will not clobber it later.
pub struct SetProficiencyUseCase<E, S, L>
where
    E: EmployeeRepository,
    S: SkillRepository,
    L: EmployeeSkillRepository,
{
    employees: E,
    skills: S,
    employee_skills: L,
}

impl<E, S, L> SetProficiencyUseCase<E, S, L>
where
    E: EmployeeRepository,
    S: SkillRepository,
    L: EmployeeSkillRepository,
{
    pub fn new(employees: E, skills: S, employee_skills: L) -> Self {
        Self {
            employees,
            skills,
            employee_skills,
        }
    }

    pub async fn execute(&self, command: SetProficiencyCommand) -> Result<SetProficiencyOutcome> {
        if self.employees.get(command.employee_id).await?.is_none() {
            return Ok(SetProficiencyOutcome::EmployeeNotFound);
        }
        if self.skills.get(command.skill_id).await?.is_none() {
            return Ok(SetProficiencyOutcome::SkillNotFound);
        }

        let level = ProficiencyLevel::new(command.level)?;
        let now = Utc::now();

        let existing = self
            .employee_skills
            .get(command.employee_id, command.skill_id)
            .await?;
        let old_level = existing.as_ref().map(|link| link.level().value());

        let mut link = existing.unwrap_or_else(|| {
            EmployeeSkill::extracted(command.employee_id, command.skill_id, level, now)
        });
        link.override_level(level, now);
        self.employee_skills.upsert(link).await?;

        tracing::info!(
            target: "audit",
            actor = %command.actor_id,
            employee = %command.employee_id,
            skill = %command.skill_id,
            old_level = ?old_level,
            new_level = command.level,
            "proficiency set"
        );

        Ok(SetProficiencyOutcome::Set)
    }
}

/// Command to remove a skill from an employee's profile
#[derive(Debug, Clone)]
pub struct RemoveEmployeeSkillCommand {
    pub actor_id: EmployeeId,
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
}

impl ValidateRequest for RemoveEmployeeSkillCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveEmployeeSkillOutcome {
    Removed,
    NotFound,
}

/// Removes an employee↔skill link
pub struct RemoveEmployeeSkillUseCase<L: EmployeeSkillRepository> {
    employee_skills: L,
}

impl<L: EmployeeSkillRepository> RemoveEmployeeSkillUseCase<L> {
    pub fn new(employee_skills: L) -> Self {
        Self { employee_skills }
    }

    pub async fn execute(
        &self,
        command: RemoveEmployeeSkillCommand,
    ) -> Result<RemoveEmployeeSkillOutcome> {
        let removed = self
            .employee_skills
            .remove(command.employee_id, command.skill_id)
            .await?;

        if !removed {
            return Ok(RemoveEmployeeSkillOutcome::NotFound);
        }

        tracing::info!(
            target: "audit",
            actor = %command.actor_id,
            employee = %command.employee_id,
            skill = %command.skill_id,
            "skill removed from profile"
        );

        Ok(RemoveEmployeeSkillOutcome::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workforce::domain::{
        EmailAddress, Employee, Role, Skill, SkillCategory, SkillName,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct MockEmployeeRepo {
        employees: Arc<Mutex<Vec<Employee>>>,
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepo {
        async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
            Ok(self
                .employees
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id() == id)
                .cloned())
        }

        async fn find_by_email(&self, _normalized_email: &str) -> Result<Option<Employee>> {
            Ok(None)
        }

        async fn search(
            &self,
            _filter: &crate::ports::outbound::EmployeeFilter,
            _page: crate::workforce::policies::PageRequest,
        ) -> Result<(Vec<Employee>, u64)> {
            Ok((vec![], 0))
        }

        async fn count_in_department(
            &self,
            _id: crate::workforce::domain::DepartmentId,
        ) -> Result<u64> {
            Ok(0)
        }

        async fn ids_in_department(
            &self,
            _id: crate::workforce::domain::DepartmentId,
        ) -> Result<Vec<EmployeeId>> {
            Ok(vec![])
        }

        async fn insert(&self, employee: Employee) -> Result<()> {
            self.employees.lock().unwrap().push(employee);
            Ok(())
        }

        async fn update(&self, _employee: Employee) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct MockSkillRepo {
        skills: Arc<Mutex<Vec<Skill>>>,
    }

    #[async_trait]
    impl SkillRepository for MockSkillRepo {
        async fn get(&self, id: SkillId) -> Result<Option<Skill>> {
            Ok(self
                .skills
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id() == id)
                .cloned())
        }

        async fn find_by_identity(&self, _name: &str, _category: &str) -> Result<Option<Skill>> {
            Ok(None)
        }

        async fn list(
            &self,
            _category: Option<&str>,
            _include_inactive: bool,
        ) -> Result<Vec<Skill>> {
            Ok(vec![])
        }

        async fn insert(&self, skill: Skill) -> Result<()> {
            self.skills.lock().unwrap().push(skill);
            Ok(())
        }

        async fn update(&self, _skill: Skill) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct MockEmployeeSkillRepo {
        links: Arc<Mutex<Vec<EmployeeSkill>>>,
    }

    impl MockEmployeeSkillRepo {
        fn find(&self, employee_id: EmployeeId, skill_id: SkillId) -> Option<EmployeeSkill> {
            self.links
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.employee_id() == employee_id && l.skill_id() == skill_id)
                .cloned()
        }
    }

    #[async_trait]
    impl EmployeeSkillRepository for MockEmployeeSkillRepo {
        async fn get(
            &self,
            employee_id: EmployeeId,
            skill_id: SkillId,
        ) -> Result<Option<EmployeeSkill>> {
            Ok(self.find(employee_id, skill_id))
        }

        async fn list_for_employee(&self, employee_id: EmployeeId) -> Result<Vec<EmployeeSkill>> {
            Ok(self
                .links
                .lock()
                .unwrap()
                .iter()
                .filter(|l| l.employee_id() == employee_id)
                .cloned()
                .collect())
        }

        async fn employees_with_skill(&self, skill_id: SkillId) -> Result<Vec<EmployeeId>> {
            Ok(self
                .links
                .lock()
                .unwrap()
                .iter()
                .filter(|l| l.skill_id() == skill_id)
                .map(|l| l.employee_id())
                .collect())
        }

        async fn counts_by_skill(&self) -> Result<Vec<(SkillId, u64)>> {
            Ok(vec![])
        }

        async fn upsert(&self, link: EmployeeSkill) -> Result<()> {
            let mut links = self.links.lock().unwrap();
            if let Some(slot) = links
                .iter_mut()
                .find(|l| l.employee_id() == link.employee_id() && l.skill_id() == link.skill_id())
            {
                *slot = link;
            } else {
                links.push(link);
            }
            Ok(())
        }

        async fn remove(&self, employee_id: EmployeeId, skill_id: SkillId) -> Result<bool> {
            let mut links = self.links.lock().unwrap();
            let before = links.len();
            links.retain(|l| !(l.employee_id() == employee_id && l.skill_id() == skill_id));
            Ok(links.len() < before)
        }
    }

    fn employee() -> Employee {
        Employee::new(
            "Ada Lovelace".to_string(),
            EmailAddress::new("ada@example.com".to_string()).unwrap(),
            Role::Member,
            None,
        )
    }

    fn skill() -> Skill {
        Skill::new(
            SkillName::new("Rust".to_string()).unwrap(),
            SkillCategory::new("Languages".to_string()).unwrap(),
            vec![],
        )
    }

    #[tokio::test]
    async fn test_set_proficiency_creates_overridden_link() {
        let ada = employee();
        let rust = skill();
        let (ada_id, rust_id) = (ada.id(), rust.id());
        let employees = MockEmployeeRepo::default();
        employees.insert(ada).await.unwrap();
        let skills = MockSkillRepo::default();
        skills.insert(rust).await.unwrap();
        let links = MockEmployeeSkillRepo::default();
        let use_case = SetProficiencyUseCase::new(employees, skills, links.clone());

        let outcome = use_case
            .execute(SetProficiencyCommand {
                actor_id: EmployeeId::new(),
                employee_id: ada_id,
                skill_id: rust_id,
                level: 4,
            })
            .await
            .unwrap();

        assert_eq!(outcome, SetProficiencyOutcome::Set);
        let link = links.find(ada_id, rust_id).unwrap();
        assert_eq!(link.level().value(), 4);
        assert!(link.is_manual_override());
    }

    #[tokio::test]
    async fn test_set_proficiency_overrides_extracted_link() {
        let ada = employee();
        let rust = skill();
        let (ada_id, rust_id) = (ada.id(), rust.id());
        let employees = MockEmployeeRepo::default();
        employees.insert(ada).await.unwrap();
        let skills = MockSkillRepo::default();
        skills.insert(rust).await.unwrap();
        let links = MockEmployeeSkillRepo::default();
        links
            .upsert(EmployeeSkill::extracted(
                ada_id,
                rust_id,
                ProficiencyLevel::new(2).unwrap(),
                Utc::now(),
            ))
            .await
            .unwrap();
        let use_case = SetProficiencyUseCase::new(employees, skills, links.clone());

        let outcome = use_case
            .execute(SetProficiencyCommand {
                actor_id: EmployeeId::new(),
                employee_id: ada_id,
                skill_id: rust_id,
                level: 5,
            })
            .await
            .unwrap();

        assert_eq!(outcome, SetProficiencyOutcome::Set);
        let link = links.find(ada_id, rust_id).unwrap();
        assert_eq!(link.level().value(), 5);
        assert!(link.is_manual_override());
    }

    #[tokio::test]
    async fn test_set_proficiency_unknown_references() {
        let ada = employee();
        let ada_id = ada.id();
        let employees = MockEmployeeRepo::default();
        employees.insert(ada).await.unwrap();
        let use_case = SetProficiencyUseCase::new(
            employees,
            MockSkillRepo::default(),
            MockEmployeeSkillRepo::default(),
        );

        let outcome = use_case
            .execute(SetProficiencyCommand {
                actor_id: EmployeeId::new(),
                employee_id: EmployeeId::new(),
                skill_id: SkillId::new(),
                level: 3,
            })
            .await
            .unwrap();
        assert_eq!(outcome, SetProficiencyOutcome::EmployeeNotFound);

        let outcome = use_case
            .execute(SetProficiencyCommand {
                actor_id: EmployeeId::new(),
                employee_id: ada_id,
                skill_id: SkillId::new(),
                level: 3,
            })
            .await
            .unwrap();
        assert_eq!(outcome, SetProficiencyOutcome::SkillNotFound);
    }

    #[test]
    fn test_set_proficiency_level_out_of_range_is_rejected() {
        let command = SetProficiencyCommand {
            actor_id: EmployeeId::new(),
            employee_id: EmployeeId::new(),
            skill_id: SkillId::new(),
            level: 0,
        };
        assert!(command.validate().is_err());

        let command = SetProficiencyCommand {
            level: 6,
            ..command
        };
        assert!(command.validate().is_err());
    }

    #[tokio::test]
    async fn test_remove_employee_skill() {
        let ada_id = EmployeeId::new();
        let rust_id = SkillId::new();
        let links = MockEmployeeSkillRepo::default();
        links
            .upsert(EmployeeSkill::extracted(
                ada_id,
                rust_id,
                ProficiencyLevel::new(3).unwrap(),
                Utc::now(),
            ))
            .await
            .unwrap();
        let use_case = RemoveEmployeeSkillUseCase::new(links.clone());

        let outcome = use_case
            .execute(RemoveEmployeeSkillCommand {
                actor_id: EmployeeId::new(),
                employee_id: ada_id,
                skill_id: rust_id,
            })
            .await
            .unwrap();
        assert_eq!(outcome, RemoveEmployeeSkillOutcome::Removed);
        assert!(links.find(ada_id, rust_id).is_none());

        let outcome = use_case
            .execute(RemoveEmployeeSkillCommand {
                actor_id: EmployeeId::new(),
                employee_id: ada_id,
                skill_id: rust_id,
            })
            .await
            .unwrap();
        assert_eq!(outcome, RemoveEmployeeSkillOutcome::NotFound);
    }
}
