use crate::ports::outbound::RequiredSkillRepository;
use crate::shared::Result;
use crate::workforce::domain::{DepartmentId, SkillId};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory store for the department↔required-skill join
#[derive(Clone, Default)]
pub struct InMemoryRequiredSkillStore {
    links: Arc<DashMap<(DepartmentId, SkillId), ()>>,
}

impl InMemoryRequiredSkillStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequiredSkillRepository for InMemoryRequiredSkillStore {
    async fn exists(&self, department_id: DepartmentId, skill_id: SkillId) -> Result<bool> {
        Ok(self.links.contains_key(&(department_id, skill_id)))
    }

    async fn list_for_department(&self, department_id: DepartmentId) -> Result<Vec<SkillId>> {
        Ok(self
            .links
            .iter()
            .filter(|l| l.key().0 == department_id)
            .map(|l| l.key().1)
            .collect())
    }

    async fn insert(&self, department_id: DepartmentId, skill_id: SkillId) -> Result<()> {
        match self.links.entry((department_id, skill_id)) {
            Entry::Occupied(_) => {
                anyhow::bail!(
                    "Skill {} is already required by department {}",
                    skill_id,
                    department_id
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(());
            }
        }
        Ok(())
    }

    async fn remove(&self, department_id: DepartmentId, skill_id: SkillId) -> Result<bool> {
        Ok(self.links.remove(&(department_id, skill_id)).is_some())
    }

    async fn remove_for_department(&self, department_id: DepartmentId) -> Result<()> {
        self.links.retain(|key, _| key.0 != department_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_exists_remove() {
        let store = InMemoryRequiredSkillStore::new();
        let (dept, skill) = (DepartmentId::new(), SkillId::new());

        assert!(!store.exists(dept, skill).await.unwrap());
        store.insert(dept, skill).await.unwrap();
        assert!(store.exists(dept, skill).await.unwrap());
        assert!(store.insert(dept, skill).await.is_err());

        assert!(store.remove(dept, skill).await.unwrap());
        assert!(!store.remove(dept, skill).await.unwrap());
    }

    #[tokio::test]
    async fn test_cascade_removes_only_that_department() {
        let store = InMemoryRequiredSkillStore::new();
        let (a, b) = (DepartmentId::new(), DepartmentId::new());
        let skill = SkillId::new();

        store.insert(a, skill).await.unwrap();
        store.insert(b, skill).await.unwrap();

        store.remove_for_department(a).await.unwrap();

        assert!(store.list_for_department(a).await.unwrap().is_empty());
        assert_eq!(store.list_for_department(b).await.unwrap().len(), 1);
    }
}
