use crate::ports::outbound::{EmployeeFilter, EmployeeRepository};
use crate::shared::Result;
use crate::workforce::domain::{DepartmentId, Employee, EmployeeId};
use crate::workforce::policies::PageRequest;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory employee store.
///
/// The normalized-email index enforces email uniqueness atomically, the
/// same way the department store claims names.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeStore {
    employees: Arc<DashMap<EmployeeId, Employee>>,
    by_email: Arc<DashMap<String, EmployeeId>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(employee: &Employee, filter: &EmployeeFilter) -> bool {
        if filter.active_only && !employee.is_active() {
            return false;
        }
        if let Some(department_id) = filter.department_id {
            if employee.department_id() != Some(department_id) {
                return false;
            }
        }
        if let Some(term) = filter.search_term.as_deref() {
            let term = term.trim().to_lowercase();
            if !term.is_empty()
                && !employee.name().to_lowercase().contains(&term)
                && !employee.email().normalized().contains(&term)
            {
                return false;
            }
        }
        if let Some(allowlist) = &filter.id_allowlist {
            if !allowlist.contains(&employee.id()) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeStore {
    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        Ok(self.employees.get(&id).map(|e| e.clone()))
    }

    async fn find_by_email(&self, normalized_email: &str) -> Result<Option<Employee>> {
        let Some(id) = self.by_email.get(normalized_email).map(|e| *e) else {
            return Ok(None);
        };
        Ok(self.employees.get(&id).map(|e| e.clone()))
    }

    async fn search(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> Result<(Vec<Employee>, u64)> {
        let mut matches: Vec<Employee> = self
            .employees
            .iter()
            .filter(|e| Self::matches(e.value(), filter))
            .map(|e| e.clone())
            .collect();
        matches.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));

        let total = matches.len() as u64;
        let items = matches
            .into_iter()
            .skip(page.offset())
            .take(page.page_size() as usize)
            .collect();
        Ok((items, total))
    }

    async fn count_in_department(&self, id: DepartmentId) -> Result<u64> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.department_id() == Some(id))
            .count() as u64)
    }

    async fn ids_in_department(&self, id: DepartmentId) -> Result<Vec<EmployeeId>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.department_id() == Some(id))
            .map(|e| e.id())
            .collect())
    }

    async fn insert(&self, employee: Employee) -> Result<()> {
        match self.by_email.entry(employee.email().normalized()) {
            Entry::Occupied(_) => {
                anyhow::bail!(
                    "Email address is already taken: {}",
                    employee.email().as_str()
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(employee.id());
            }
        }
        self.employees.insert(employee.id(), employee);
        Ok(())
    }

    async fn update(&self, employee: Employee) -> Result<()> {
        if !self.employees.contains_key(&employee.id()) {
            anyhow::bail!("Employee does not exist: {}", employee.id());
        }
        // Email is immutable on the entity, so the index needs no upkeep
        self.employees.insert(employee.id(), employee);
        Ok(())
    }
}
