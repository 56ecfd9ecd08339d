use crate::shared::Result;
use crate::workforce::domain::{Skill, SkillId};
use async_trait::async_trait;

/// SkillRepository port for taxonomy persistence
///
/// Identity lookups compare the (name, category) pair case-insensitively,
/// matching the uniqueness rule on the entity.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Loads a skill by id, `None` when absent
    async fn get(&self, id: SkillId) -> Result<Option<Skill>>;

    /// Finds a skill by its (name, category) identity, case-insensitive
    async fn find_by_identity(&self, name: &str, category: &str) -> Result<Option<Skill>>;

    /// Lists skills, optionally restricted to one category
    /// (case-insensitive). Inactive skills are included only on request.
    async fn list(&self, category: Option<&str>, include_inactive: bool) -> Result<Vec<Skill>>;

    /// Inserts a new skill
    ///
    /// # Errors
    /// Returns an error when the (name, category) uniqueness constraint
    /// is violated.
    async fn insert(&self, skill: Skill) -> Result<()>;

    /// Persists changes to an existing skill
    async fn update(&self, skill: Skill) -> Result<()>;
}
