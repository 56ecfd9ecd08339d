use crate::shared::Result;
use crate::workforce::domain::{DepartmentId, Employee, EmployeeId};
use crate::workforce::policies::PageRequest;
use async_trait::async_trait;
use std::collections::HashSet;

/// Filter for the paged employee search.
///
/// `id_allowlist` is filled in by the use case when the caller filters by
/// skill: the skill-link repository resolves the holders first, and the
/// employee search then restricts itself to those ids.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub search_term: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub active_only: bool,
    pub id_allowlist: Option<HashSet<EmployeeId>>,
}

/// EmployeeRepository port for employee persistence
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Loads an employee by id, `None` when absent
    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Finds an employee by normalized email address
    async fn find_by_email(&self, normalized_email: &str) -> Result<Option<Employee>>;

    /// Paged search ordered by name. Returns the page of matches and the
    /// total match count across all pages.
    async fn search(&self, filter: &EmployeeFilter, page: PageRequest)
        -> Result<(Vec<Employee>, u64)>;

    /// Counts employees assigned to a department
    async fn count_in_department(&self, id: DepartmentId) -> Result<u64>;

    /// Lists the ids of employees assigned to a department
    async fn ids_in_department(&self, id: DepartmentId) -> Result<Vec<EmployeeId>>;

    /// Inserts a new employee
    ///
    /// # Errors
    /// Returns an error when the email uniqueness constraint is violated.
    async fn insert(&self, employee: Employee) -> Result<()>;

    /// Persists changes to an existing employee
    async fn update(&self, employee: Employee) -> Result<()>;
}
