//! Department use cases: CRUD plus the required-skill links.

use crate::application::dto::DepartmentDto;
use crate::application::validation::{
    require_max_length, require_text, ValidateRequest, ValidationFailure,
};
use crate::ports::outbound::{
    DepartmentRepository, EmployeeRepository, RequiredSkillRepository, SkillRepository,
};
use crate::shared::Result;
use crate::workforce::domain::{Department, DepartmentId, DepartmentName, SkillId};

const MAX_NAME: usize = 200;

/// Command to create a department
#[derive(Debug, Clone)]
pub struct CreateDepartmentCommand {
    pub name: String,
}

impl ValidateRequest for CreateDepartmentCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        require_text(&mut failure, "name", &self.name);
        require_max_length(&mut failure, "name", &self.name, MAX_NAME);
        failure.into_result()
    }
}

#[derive(Debug)]
pub enum CreateDepartmentOutcome {
    Created(DepartmentDto),
    DuplicateName,
}

/// Creates a department after checking name uniqueness
pub struct CreateDepartmentUseCase<D: DepartmentRepository> {
    departments: D,
}

impl<D: DepartmentRepository> CreateDepartmentUseCase<D> {
    pub fn new(departments: D) -> Self {
        Self { departments }
    }

    pub async fn execute(&self, command: CreateDepartmentCommand) -> Result<CreateDepartmentOutcome> {
        let name = DepartmentName::new(command.name)?;

        if self
            .departments
            .find_by_name(&name.normalized())
            .await?
            .is_some()
        {
            return Ok(CreateDepartmentOutcome::DuplicateName);
        }

        let department = Department::new(name);
        let dto = DepartmentDto::from_entity(&department);
        self.departments.insert(department).await?;

        Ok(CreateDepartmentOutcome::Created(dto))
    }
}

/// Command to rename a department
#[derive(Debug, Clone)]
pub struct RenameDepartmentCommand {
    pub id: DepartmentId,
    pub name: String,
}

impl ValidateRequest for RenameDepartmentCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        require_text(&mut failure, "name", &self.name);
        require_max_length(&mut failure, "name", &self.name, MAX_NAME);
        failure.into_result()
    }
}

#[derive(Debug)]
pub enum RenameDepartmentOutcome {
    Renamed(DepartmentDto),
    NotFound,
    DuplicateName,
}

/// Renames a department.
///
/// Renaming to a name held by a different department conflicts; renaming
/// to your own name (including case changes) succeeds.
pub struct RenameDepartmentUseCase<D: DepartmentRepository> {
    departments: D,
}

impl<D: DepartmentRepository> RenameDepartmentUseCase<D> {
    pub fn new(departments: D) -> Self {
        Self { departments }
    }

    pub async fn execute(&self, command: RenameDepartmentCommand) -> Result<RenameDepartmentOutcome> {
        let Some(mut department) = self.departments.get(command.id).await? else {
            return Ok(RenameDepartmentOutcome::NotFound);
        };

        let name = DepartmentName::new(command.name)?;
        if let Some(existing) = self.departments.find_by_name(&name.normalized()).await? {
            if existing.id() != department.id() {
                return Ok(RenameDepartmentOutcome::DuplicateName);
            }
        }

        department.rename(name);
        let dto = DepartmentDto::from_entity(&department);
        self.departments.update(department).await?;

        Ok(RenameDepartmentOutcome::Renamed(dto))
    }
}

/// Command to delete a department
#[derive(Debug, Clone)]
pub struct DeleteDepartmentCommand {
    pub id: DepartmentId,
}

impl ValidateRequest for DeleteDepartmentCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteDepartmentOutcome {
    Deleted,
    NotFound,
    HasEmployees,
}

/// Deletes a department unless employees are still assigned to it.
/// A successful delete cascades the required-skill links.
pub struct DeleteDepartmentUseCase<D, E, R>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
    R: RequiredSkillRepository,
{
    departments: D,
    employees: E,
    required_skills: R,
}

impl<D, E, R> DeleteDepartmentUseCase<D, E, R>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
    R: RequiredSkillRepository,
{
    pub fn new(departments: D, employees: E, required_skills: R) -> Self {
        Self {
            departments,
            employees,
            required_skills,
        }
    }

    pub async fn execute(&self, command: DeleteDepartmentCommand) -> Result<DeleteDepartmentOutcome> {
        if self.departments.get(command.id).await?.is_none() {
            return Ok(DeleteDepartmentOutcome::NotFound);
        }

        if self.employees.count_in_department(command.id).await? > 0 {
            return Ok(DeleteDepartmentOutcome::HasEmployees);
        }

        self.required_skills
            .remove_for_department(command.id)
            .await?;
        self.departments.remove(command.id).await?;

        Ok(DeleteDepartmentOutcome::Deleted)
    }
}

/// Query for a single department
#[derive(Debug, Clone)]
pub struct GetDepartmentQuery {
    pub id: DepartmentId,
}

impl ValidateRequest for GetDepartmentQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Looks up one department by id
pub struct GetDepartmentUseCase<D: DepartmentRepository> {
    departments: D,
}

impl<D: DepartmentRepository> GetDepartmentUseCase<D> {
    pub fn new(departments: D) -> Self {
        Self { departments }
    }

    pub async fn execute(&self, query: GetDepartmentQuery) -> Result<Option<DepartmentDto>> {
        Ok(self
            .departments
            .get(query.id)
            .await?
            .map(|d| DepartmentDto::from_entity(&d)))
    }
}

/// Lists all departments sorted by name
pub struct ListDepartmentsUseCase<D: DepartmentRepository> {
    departments: D,
}

impl<D: DepartmentRepository> ListDepartmentsUseCase<D> {
    pub fn new(departments: D) -> Self {
        Self { departments }
    }

    pub async fn execute(&self) -> Result<Vec<DepartmentDto>> {
        let mut departments = self.departments.list().await?;
        departments.sort_by(|a, b| a.name().normalized().cmp(&b.name().normalized()));
        Ok(departments
            .iter()
            .map(DepartmentDto::from_entity)
            .collect())
    }
}

/// Command to mark a skill as required for a department
#[derive(Debug, Clone)]
pub struct AddRequiredSkillCommand {
    pub department_id: DepartmentId,
    pub skill_id: SkillId,
}

impl ValidateRequest for AddRequiredSkillCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddRequiredSkillOutcome {
    Added,
    DepartmentNotFound,
    SkillNotFound,
    AlreadyRequired,
}

/// Links a required skill to a department, rejecting duplicates
pub struct AddRequiredSkillUseCase<D, S, R>
where
    D: DepartmentRepository,
    S: SkillRepository,
    R: RequiredSkillRepository,
{
    departments: D,
    skills: S,
    required_skills: R,
}

impl<D, S, R> AddRequiredSkillUseCase<D, S, R>
where
    D: DepartmentRepository,
    S: SkillRepository,
    R: RequiredSkillRepository,
{
    pub fn new(departments: D, skills: S, required_skills: R) -> Self {
        Self {
            departments,
            skills,
            required_skills,
        }
    }

    pub async fn execute(&self, command: AddRequiredSkillCommand) -> Result<AddRequiredSkillOutcome> {
        if self.departments.get(command.department_id).await?.is_none() {
            return Ok(AddRequiredSkillOutcome::DepartmentNotFound);
        }

        if self.skills.get(command.skill_id).await?.is_none() {
            return Ok(AddRequiredSkillOutcome::SkillNotFound);
        }

        if self
            .required_skills
            .exists(command.department_id, command.skill_id)
            .await?
        {
            return Ok(AddRequiredSkillOutcome::AlreadyRequired);
        }

        self.required_skills
            .insert(command.department_id, command.skill_id)
            .await?;

        Ok(AddRequiredSkillOutcome::Added)
    }
}

/// Command to unlink a required skill from a department
#[derive(Debug, Clone)]
pub struct RemoveRequiredSkillCommand {
    pub department_id: DepartmentId,
    pub skill_id: SkillId,
}

impl ValidateRequest for RemoveRequiredSkillCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveRequiredSkillOutcome {
    Removed,
    NotFound,
}

/// Unlinks a required skill from a department
pub struct RemoveRequiredSkillUseCase<R: RequiredSkillRepository> {
    required_skills: R,
}

impl<R: RequiredSkillRepository> RemoveRequiredSkillUseCase<R> {
    pub fn new(required_skills: R) -> Self {
        Self { required_skills }
    }

    pub async fn execute(
        &self,
        command: RemoveRequiredSkillCommand,
    ) -> Result<RemoveRequiredSkillOutcome> {
        let removed = self
            .required_skills
            .remove(command.department_id, command.skill_id)
            .await?;

        if removed {
            Ok(RemoveRequiredSkillOutcome::Removed)
        } else {
            Ok(RemoveRequiredSkillOutcome::NotFound)
        }
    }
}
