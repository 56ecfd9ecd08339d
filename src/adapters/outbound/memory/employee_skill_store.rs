use crate::ports::outbound::EmployeeSkillRepository;
use crate::shared::Result;
use crate::workforce::domain::{EmployeeId, EmployeeSkill, SkillId};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory store for the employee↔skill join, keyed by the id pair
#[derive(Clone, Default)]
pub struct InMemoryEmployeeSkillStore {
    links: Arc<DashMap<(EmployeeId, SkillId), EmployeeSkill>>,
}

impl InMemoryEmployeeSkillStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeSkillRepository for InMemoryEmployeeSkillStore {
    async fn get(
        &self,
        employee_id: EmployeeId,
        skill_id: SkillId,
    ) -> Result<Option<EmployeeSkill>> {
        Ok(self.links.get(&(employee_id, skill_id)).map(|l| l.clone()))
    }

    async fn list_for_employee(&self, employee_id: EmployeeId) -> Result<Vec<EmployeeSkill>> {
        Ok(self
            .links
            .iter()
            .filter(|l| l.employee_id() == employee_id)
            .map(|l| l.clone())
            .collect())
    }

    async fn employees_with_skill(&self, skill_id: SkillId) -> Result<Vec<EmployeeId>> {
        Ok(self
            .links
            .iter()
            .filter(|l| l.skill_id() == skill_id)
            .map(|l| l.employee_id())
            .collect())
    }

    async fn counts_by_skill(&self) -> Result<Vec<(SkillId, u64)>> {
        let mut counts: HashMap<SkillId, u64> = HashMap::new();
        for link in self.links.iter() {
            *counts.entry(link.skill_id()).or_insert(0) += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn upsert(&self, link: EmployeeSkill) -> Result<()> {
        self.links
            .insert((link.employee_id(), link.skill_id()), link);
        Ok(())
    }

    async fn remove(&self, employee_id: EmployeeId, skill_id: SkillId) -> Result<bool> {
        Ok(self.links.remove(&(employee_id, skill_id)).is_some())
    }
}
