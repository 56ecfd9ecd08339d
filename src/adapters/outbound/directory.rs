use crate::ports::outbound::{DirectoryErrorCode, DirectoryResponse, UserDirectory};
use crate::shared::Result;
use crate::workforce::domain::{EmailAddress, EmployeeId, Role};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Account {
    role: Role,
    active: bool,
}

/// In-memory user directory.
///
/// Stands in for the external account service: it keeps its own account
/// table keyed by employee id and answers with the same success/error-code
/// envelope a remote directory would, so the use-case mapping paths are
/// exercised for real.
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    accounts: Arc<DashMap<EmployeeId, Account>>,
    by_email: Arc<DashMap<String, EmployeeId>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of provisioned accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the directory lists the account as active
    pub fn is_account_active(&self, id: EmployeeId) -> Option<bool> {
        self.accounts.get(&id).map(|a| a.active)
    }

    /// The role the directory has on file for the account
    pub fn account_role(&self, id: EmployeeId) -> Option<Role> {
        self.accounts.get(&id).map(|a| a.role)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn create_account(
        &self,
        id: EmployeeId,
        email: &EmailAddress,
        role: Role,
    ) -> Result<DirectoryResponse> {
        match self.by_email.entry(email.normalized()) {
            Entry::Occupied(_) => {
                return Ok(DirectoryResponse::rejected(
                    DirectoryErrorCode::DuplicateEmail,
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }
        self.accounts.insert(id, Account { role, active: true });
        Ok(DirectoryResponse::ok())
    }

    async fn activate_account(&self, id: EmployeeId) -> Result<DirectoryResponse> {
        match self.accounts.get_mut(&id) {
            Some(mut account) => {
                account.active = true;
                Ok(DirectoryResponse::ok())
            }
            None => Ok(DirectoryResponse::rejected(
                DirectoryErrorCode::AccountNotFound,
            )),
        }
    }

    async fn deactivate_account(&self, id: EmployeeId) -> Result<DirectoryResponse> {
        match self.accounts.get_mut(&id) {
            Some(mut account) => {
                account.active = false;
                Ok(DirectoryResponse::ok())
            }
            None => Ok(DirectoryResponse::rejected(
                DirectoryErrorCode::AccountNotFound,
            )),
        }
    }

    async fn update_role(&self, id: EmployeeId, role: Role) -> Result<DirectoryResponse> {
        match self.accounts.get_mut(&id) {
            Some(mut account) => {
                account.role = role;
                Ok(DirectoryResponse::ok())
            }
            None => Ok(DirectoryResponse::rejected(
                DirectoryErrorCode::AccountNotFound,
            )),
        }
    }
}
