//! Employee use cases.
//!
//! Account lifecycle changes (create, activate, deactivate, role) are
//! delegated to the user directory first; the local employee record is
//! only mutated after the directory confirms. The directory's
//! machine-readable error code is mapped onto the outcome enum.

use crate::application::dto::{EmployeeDto, EmployeeProfileDto, EmployeeSkillDto, PagedResult};
use crate::application::validation::{
    require_email_shape, require_max_length, require_text, ValidateRequest, ValidationFailure,
};
use crate::ports::outbound::{
    DepartmentRepository, DirectoryErrorCode, EmployeeFilter, EmployeeRepository,
    EmployeeSkillRepository, SkillRepository, UserDirectory,
};
use crate::shared::Result;
use crate::workforce::domain::{DepartmentId, EmailAddress, Employee, EmployeeId, Role, SkillId};
use crate::workforce::policies::PageRequest;

const MAX_NAME: usize = 200;

/// Paged employee search query. Out-of-range paging values are clamped,
/// never rejected.
#[derive(Debug, Clone, Default)]
pub struct SearchEmployeesQuery {
    pub search_term: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub skill_id: Option<SkillId>,
    pub active_only: bool,
    pub page: i32,
    pub page_size: i32,
}

impl ValidateRequest for SearchEmployeesQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Paged employee search, optionally restricted to holders of one skill
pub struct SearchEmployeesUseCase<E, L>
where
    E: EmployeeRepository,
    L: EmployeeSkillRepository,
{
    employees: E,
    employee_skills: L,
}

impl<E, L> SearchEmployeesUseCase<E, L>
where
    E: EmployeeRepository,
    L: EmployeeSkillRepository,
{
    pub fn new(employees: E, employee_skills: L) -> Self {
        Self {
            employees,
            employee_skills,
        }
    }

    pub async fn execute(&self, query: SearchEmployeesQuery) -> Result<PagedResult<EmployeeDto>> {
        let page = PageRequest::clamped(query.page, query.page_size);

        let mut filter = EmployeeFilter {
            search_term: query.search_term,
            department_id: query.department_id,
            active_only: query.active_only,
            id_allowlist: None,
        };

        // The skill filter resolves to a holder set first, then the
        // employee search restricts itself to those ids.
        if let Some(skill_id) = query.skill_id {
            let holders = self.employee_skills.employees_with_skill(skill_id).await?;
            filter.id_allowlist = Some(holders.into_iter().collect());
        }

        let (employees, total_count) = self.employees.search(&filter, page).await?;
        let items = employees.iter().map(EmployeeDto::from_entity).collect();

        Ok(PagedResult::new(items, total_count, page))
    }
}

/// Query for one employee's full profile
#[derive(Debug, Clone)]
pub struct GetEmployeeProfileQuery {
    pub id: EmployeeId,
}

impl ValidateRequest for GetEmployeeProfileQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Assembles an employee profile: the employee, their department name,
/// and their skills sorted by skill name.
pub struct GetEmployeeProfileUseCase<E, D, L, S>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    L: EmployeeSkillRepository,
    S: SkillRepository,
{
    employees: E,
    departments: D,
    employee_skills: L,
    skills: S,
}

impl<E, D, L, S> GetEmployeeProfileUseCase<E, D, L, S>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    L: EmployeeSkillRepository,
    S: SkillRepository,
{
    pub fn new(employees: E, departments: D, employee_skills: L, skills: S) -> Self {
        Self {
            employees,
            departments,
            employee_skills,
            skills,
        }
    }

    pub async fn execute(
        &self,
        query: GetEmployeeProfileQuery,
    ) -> Result<Option<EmployeeProfileDto>> {
        let Some(employee) = self.employees.get(query.id).await? else {
            return Ok(None);
        };

        let department_name = match employee.department_id() {
            Some(department_id) => self
                .departments
                .get(department_id)
                .await?
                .map(|d| d.name().as_str().to_string()),
            None => None,
        };

        let links = self.employee_skills.list_for_employee(query.id).await?;
        let mut skills = Vec::with_capacity(links.len());
        for link in &links {
            // A link whose skill vanished from the taxonomy is dangling;
            // the profile simply omits it.
            if let Some(skill) = self.skills.get(link.skill_id()).await? {
                skills.push(EmployeeSkillDto::from_link(link, &skill));
            }
        }
        skills.sort_by(|a, b| a.skill_name.to_lowercase().cmp(&b.skill_name.to_lowercase()));

        Ok(Some(EmployeeProfileDto {
            employee: EmployeeDto::from_entity(&employee),
            department_name,
            skills,
        }))
    }
}

/// Command to create an employee account
#[derive(Debug, Clone)]
pub struct CreateEmployeeCommand {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
}

impl ValidateRequest for CreateEmployeeCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        require_text(&mut failure, "name", &self.name);
        require_max_length(&mut failure, "name", &self.name, MAX_NAME);
        require_email_shape(&mut failure, "email", &self.email);
        failure.into_result()
    }
}

#[derive(Debug)]
pub enum CreateEmployeeOutcome {
    Created(EmployeeDto),
    DuplicateEmail,
    DepartmentNotFound,
    Rejected,
}

/// Creates an employee: checks the references, provisions the directory
/// account, then persists the local record.
pub struct CreateEmployeeUseCase<E, D, U>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    U: UserDirectory,
{
    employees: E,
    departments: D,
    directory: U,
}

impl<E, D, U> CreateEmployeeUseCase<E, D, U>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    U: UserDirectory,
{
    pub fn new(employees: E, departments: D, directory: U) -> Self {
        Self {
            employees,
            departments,
            directory,
        }
    }

    pub async fn execute(&self, command: CreateEmployeeCommand) -> Result<CreateEmployeeOutcome> {
        if let Some(department_id) = command.department_id {
            if self.departments.get(department_id).await?.is_none() {
                return Ok(CreateEmployeeOutcome::DepartmentNotFound);
            }
        }

        let email = EmailAddress::new(command.email)?;
        if self
            .employees
            .find_by_email(&email.normalized())
            .await?
            .is_some()
        {
            return Ok(CreateEmployeeOutcome::DuplicateEmail);
        }

        let employee = Employee::new(command.name, email, command.role, command.department_id);

        let response = self
            .directory
            .create_account(employee.id(), employee.email(), employee.role())
            .await?;
        if !response.success {
            return Ok(match response.error_code {
                Some(DirectoryErrorCode::DuplicateEmail) => CreateEmployeeOutcome::DuplicateEmail,
                _ => CreateEmployeeOutcome::Rejected,
            });
        }

        let dto = EmployeeDto::from_entity(&employee);
        self.employees.insert(employee).await?;

        Ok(CreateEmployeeOutcome::Created(dto))
    }
}

/// Command to update an employee's name and department association.
/// `department_id: None` clears the association.
#[derive(Debug, Clone)]
pub struct UpdateEmployeeCommand {
    pub id: EmployeeId,
    pub name: Option<String>,
    pub department_id: Option<DepartmentId>,
}

impl ValidateRequest for UpdateEmployeeCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        if let Some(name) = &self.name {
            require_text(&mut failure, "name", name);
            require_max_length(&mut failure, "name", name, MAX_NAME);
        }
        failure.into_result()
    }
}

#[derive(Debug)]
pub enum UpdateEmployeeOutcome {
    Updated(EmployeeDto),
    NotFound,
    DepartmentNotFound,
}

/// Updates an employee's name and department association
pub struct UpdateEmployeeUseCase<E, D>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
{
    employees: E,
    departments: D,
}

impl<E, D> UpdateEmployeeUseCase<E, D>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
{
    pub fn new(employees: E, departments: D) -> Self {
        Self {
            employees,
            departments,
        }
    }

    pub async fn execute(&self, command: UpdateEmployeeCommand) -> Result<UpdateEmployeeOutcome> {
        let Some(mut employee) = self.employees.get(command.id).await? else {
            return Ok(UpdateEmployeeOutcome::NotFound);
        };

        if let Some(department_id) = command.department_id {
            if self.departments.get(department_id).await?.is_none() {
                return Ok(UpdateEmployeeOutcome::DepartmentNotFound);
            }
        }

        if let Some(name) = command.name {
            employee.rename(name.trim().to_string());
        }
        employee.assign_department(command.department_id);

        let dto = EmployeeDto::from_entity(&employee);
        self.employees.update(employee).await?;

        Ok(UpdateEmployeeOutcome::Updated(dto))
    }
}

/// Command to change another employee's role
#[derive(Debug, Clone)]
pub struct ChangeEmployeeRoleCommand {
    pub actor_id: EmployeeId,
    pub employee_id: EmployeeId,
    pub role: Role,
}

impl ValidateRequest for ChangeEmployeeRoleCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ChangeEmployeeRoleOutcome {
    Changed,
    NotFound,
    CannotChangeOwnRole,
    Rejected,
}

/// Changes an employee's role. The self-action guard fires before any
/// repository access.
pub struct ChangeEmployeeRoleUseCase<E, U>
where
    E: EmployeeRepository,
    U: UserDirectory,
{
    employees: E,
    directory: U,
}

impl<E, U> ChangeEmployeeRoleUseCase<E, U>
where
    E: EmployeeRepository,
    U: UserDirectory,
{
    pub fn new(employees: E, directory: U) -> Self {
        Self {
            employees,
            directory,
        }
    }

    pub async fn execute(
        &self,
        command: ChangeEmployeeRoleCommand,
    ) -> Result<ChangeEmployeeRoleOutcome> {
        if command.actor_id == command.employee_id {
            return Ok(ChangeEmployeeRoleOutcome::CannotChangeOwnRole);
        }

        let Some(mut employee) = self.employees.get(command.employee_id).await? else {
            return Ok(ChangeEmployeeRoleOutcome::NotFound);
        };

        let response = self
            .directory
            .update_role(command.employee_id, command.role)
            .await?;
        if !response.success {
            return Ok(match response.error_code {
                Some(DirectoryErrorCode::AccountNotFound) => ChangeEmployeeRoleOutcome::NotFound,
                _ => ChangeEmployeeRoleOutcome::Rejected,
            });
        }

        employee.set_role(command.role);
        self.employees.update(employee).await?;

        Ok(ChangeEmployeeRoleOutcome::Changed)
    }
}

/// Command to deactivate an employee account
#[derive(Debug, Clone)]
pub struct DeactivateEmployeeCommand {
    pub actor_id: EmployeeId,
    pub employee_id: EmployeeId,
}

impl ValidateRequest for DeactivateEmployeeCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeactivateEmployeeOutcome {
    Deactivated,
    NotFound,
    CannotDeactivateSelf,
    Rejected,
}

/// Deactivates an employee account. Self-deactivation is blocked so an
/// admin cannot lock themselves out.
pub struct DeactivateEmployeeUseCase<E, U>
where
    E: EmployeeRepository,
    U: UserDirectory,
{
    employees: E,
    directory: U,
}

impl<E, U> DeactivateEmployeeUseCase<E, U>
where
    E: EmployeeRepository,
    U: UserDirectory,
{
    pub fn new(employees: E, directory: U) -> Self {
        Self {
            employees,
            directory,
        }
    }

    pub async fn execute(
        &self,
        command: DeactivateEmployeeCommand,
    ) -> Result<DeactivateEmployeeOutcome> {
        if command.actor_id == command.employee_id {
            return Ok(DeactivateEmployeeOutcome::CannotDeactivateSelf);
        }

        let Some(mut employee) = self.employees.get(command.employee_id).await? else {
            return Ok(DeactivateEmployeeOutcome::NotFound);
        };

        let response = self.directory.deactivate_account(command.employee_id).await?;
        if !response.success {
            return Ok(match response.error_code {
                Some(DirectoryErrorCode::AccountNotFound) => DeactivateEmployeeOutcome::NotFound,
                _ => DeactivateEmployeeOutcome::Rejected,
            });
        }

        employee.deactivate();
        self.employees.update(employee).await?;

        Ok(DeactivateEmployeeOutcome::Deactivated)
    }
}

/// Command to reactivate an employee account
#[derive(Debug, Clone)]
pub struct ActivateEmployeeCommand {
    pub actor_id: EmployeeId,
    pub employee_id: EmployeeId,
}

impl ValidateRequest for ActivateEmployeeCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ActivateEmployeeOutcome {
    Activated,
    NotFound,
    Rejected,
}

/// Reactivates a previously deactivated employee account
pub struct ActivateEmployeeUseCase<E, U>
where
    E: EmployeeRepository,
    U: UserDirectory,
{
    employees: E,
    directory: U,
}

impl<E, U> ActivateEmployeeUseCase<E, U>
where
    E: EmployeeRepository,
    U: UserDirectory,
{
    pub fn new(employees: E, directory: U) -> Self {
        Self {
            employees,
            directory,
        }
    }

    pub async fn execute(
        &self,
        command: ActivateEmployeeCommand,
    ) -> Result<ActivateEmployeeOutcome> {
        let Some(mut employee) = self.employees.get(command.employee_id).await? else {
            return Ok(ActivateEmployeeOutcome::NotFound);
        };

        let response = self.directory.activate_account(command.employee_id).await?;
        if !response.success {
            return Ok(match response.error_code {
                Some(DirectoryErrorCode::AccountNotFound) => ActivateEmployeeOutcome::NotFound,
                _ => ActivateEmployeeOutcome::Rejected,
            });
        }

        employee.activate();
        self.employees.update(employee).await?;

        Ok(ActivateEmployeeOutcome::Activated)
    }
}
