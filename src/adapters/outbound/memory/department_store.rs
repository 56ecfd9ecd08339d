use crate::ports::outbound::DepartmentRepository;
use crate::shared::Result;
use crate::workforce::domain::{Department, DepartmentId};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory department store.
///
/// The normalized-name index doubles as the uniqueness constraint: an
/// insert or rename claims the name through the index's entry API before
/// the record itself is written, so two racing writers cannot both take
/// the same name.
#[derive(Clone, Default)]
pub struct InMemoryDepartmentStore {
    departments: Arc<DashMap<DepartmentId, Department>>,
    by_name: Arc<DashMap<String, DepartmentId>>,
}

impl InMemoryDepartmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentStore {
    async fn get(&self, id: DepartmentId) -> Result<Option<Department>> {
        Ok(self.departments.get(&id).map(|d| d.clone()))
    }

    async fn find_by_name(&self, normalized_name: &str) -> Result<Option<Department>> {
        let Some(id) = self.by_name.get(normalized_name).map(|e| *e) else {
            return Ok(None);
        };
        Ok(self.departments.get(&id).map(|d| d.clone()))
    }

    async fn list(&self) -> Result<Vec<Department>> {
        Ok(self.departments.iter().map(|d| d.clone()).collect())
    }

    async fn insert(&self, department: Department) -> Result<()> {
        match self.by_name.entry(department.name().normalized()) {
            Entry::Occupied(_) => {
                anyhow::bail!(
                    "Department name is already taken: {}",
                    department.name().as_str()
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(department.id());
            }
        }
        self.departments.insert(department.id(), department);
        Ok(())
    }

    async fn update(&self, department: Department) -> Result<()> {
        let Some(previous) = self.departments.get(&department.id()).map(|d| d.clone()) else {
            anyhow::bail!("Department does not exist: {}", department.id());
        };

        let old_key = previous.name().normalized();
        let new_key = department.name().normalized();
        if old_key != new_key {
            match self.by_name.entry(new_key) {
                Entry::Occupied(_) => {
                    anyhow::bail!(
                        "Department name is already taken: {}",
                        department.name().as_str()
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(department.id());
                }
            }
            self.by_name.remove(&old_key);
        }

        self.departments.insert(department.id(), department);
        Ok(())
    }

    async fn remove(&self, id: DepartmentId) -> Result<bool> {
        let Some((_, department)) = self.departments.remove(&id) else {
            return Ok(false);
        };
        self.by_name.remove(&department.name().normalized());
        Ok(true)
    }
}
