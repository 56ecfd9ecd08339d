use crate::shared::Result;
use crate::workforce::domain::{EmailAddress, EmployeeId, Role};
use async_trait::async_trait;

/// Machine-readable rejection codes returned by the user directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryErrorCode {
    /// An account with this email already exists
    DuplicateEmail,
    /// The directory has no account for this id
    AccountNotFound,
    /// The requested role is not provisioned in the directory
    InvalidRole,
    /// The directory's own policy refused the change
    PolicyViolation,
}

/// Outcome of a directory operation: a success flag plus an optional
/// machine-readable error code for the handler's outcome mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryResponse {
    pub success: bool,
    pub error_code: Option<DirectoryErrorCode>,
}

impl DirectoryResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error_code: None,
        }
    }

    pub fn rejected(code: DirectoryErrorCode) -> Self {
        Self {
            success: false,
            error_code: Some(code),
        }
    }
}

/// UserDirectory port for the external user-management service
///
/// Account lifecycle changes go through the directory first; the local
/// employee record is only mutated after the directory confirms.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Provisions a directory account for a new employee
    async fn create_account(
        &self,
        id: EmployeeId,
        email: &EmailAddress,
        role: Role,
    ) -> Result<DirectoryResponse>;

    /// Re-enables a previously deactivated account
    async fn activate_account(&self, id: EmployeeId) -> Result<DirectoryResponse>;

    /// Disables an account
    async fn deactivate_account(&self, id: EmployeeId) -> Result<DirectoryResponse>;

    /// Changes the role attached to an account
    async fn update_role(&self, id: EmployeeId, role: Role) -> Result<DirectoryResponse>;
}
