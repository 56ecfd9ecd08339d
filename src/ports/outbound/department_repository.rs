use crate::shared::Result;
use crate::workforce::domain::{Department, DepartmentId};
use async_trait::async_trait;

/// DepartmentRepository port for department persistence
///
/// Name lookups use the normalized (lowercased) form so the handler-level
/// uniqueness checks are case-insensitive. Implementations must also
/// enforce the name uniqueness constraint atomically at insert/update
/// time; a violation that races past the handler check is an
/// infrastructure error, not a business outcome.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Loads a department by id, `None` when absent
    async fn get(&self, id: DepartmentId) -> Result<Option<Department>>;

    /// Finds a department by its normalized name
    async fn find_by_name(&self, normalized_name: &str) -> Result<Option<Department>>;

    /// Lists all departments, unordered
    async fn list(&self) -> Result<Vec<Department>>;

    /// Inserts a new department
    ///
    /// # Errors
    /// Returns an error when the name uniqueness constraint is violated.
    async fn insert(&self, department: Department) -> Result<()>;

    /// Persists changes to an existing department
    async fn update(&self, department: Department) -> Result<()>;

    /// Removes a department. Returns `false` when it did not exist.
    async fn remove(&self, id: DepartmentId) -> Result<bool>;
}
