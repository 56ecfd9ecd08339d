use crate::ports::outbound::SkillRepository;
use crate::shared::Result;
use crate::workforce::domain::{skill::identity_key, Skill, SkillId};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory skill store with an identity index over the lowercased
/// (name, category) pair. The index enforces taxonomy uniqueness
/// atomically on insert and on identity-changing updates.
#[derive(Clone, Default)]
pub struct InMemorySkillStore {
    skills: Arc<DashMap<SkillId, Skill>>,
    by_identity: Arc<DashMap<(String, String), SkillId>>,
}

impl InMemorySkillStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillStore {
    async fn get(&self, id: SkillId) -> Result<Option<Skill>> {
        Ok(self.skills.get(&id).map(|s| s.clone()))
    }

    async fn find_by_identity(&self, name: &str, category: &str) -> Result<Option<Skill>> {
        let Some(id) = self.by_identity.get(&identity_key(name, category)).map(|e| *e) else {
            return Ok(None);
        };
        Ok(self.skills.get(&id).map(|s| s.clone()))
    }

    async fn list(&self, category: Option<&str>, include_inactive: bool) -> Result<Vec<Skill>> {
        Ok(self
            .skills
            .iter()
            .filter(|s| include_inactive || s.is_active())
            .filter(|s| {
                category
                    .map(|c| s.category().as_str().eq_ignore_ascii_case(c.trim()))
                    .unwrap_or(true)
            })
            .map(|s| s.clone())
            .collect())
    }

    async fn insert(&self, skill: Skill) -> Result<()> {
        match self.by_identity.entry(skill.identity_key()) {
            Entry::Occupied(_) => {
                anyhow::bail!(
                    "Skill already exists in the taxonomy: {} ({})",
                    skill.name().as_str(),
                    skill.category().as_str()
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(skill.id());
            }
        }
        self.skills.insert(skill.id(), skill);
        Ok(())
    }

    async fn update(&self, skill: Skill) -> Result<()> {
        let Some(previous) = self.skills.get(&skill.id()).map(|s| s.clone()) else {
            anyhow::bail!("Skill does not exist: {}", skill.id());
        };

        let old_key = previous.identity_key();
        let new_key = skill.identity_key();
        if old_key != new_key {
            match self.by_identity.entry(new_key) {
                Entry::Occupied(_) => {
                    anyhow::bail!(
                        "Skill already exists in the taxonomy: {} ({})",
                        skill.name().as_str(),
                        skill.category().as_str()
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(skill.id());
                }
            }
            self.by_identity.remove(&old_key);
        }

        self.skills.insert(skill.id(), skill);
        Ok(())
    }
}
