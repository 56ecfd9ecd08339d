use crate::workforce::domain::{Skill, SkillId};
use serde::Serialize;

/// Skill response DTO
#[derive(Debug, Clone, Serialize)]
pub struct SkillDto {
    pub id: SkillId,
    pub name: String,
    pub category: String,
    pub aliases: Vec<String>,
    pub active: bool,
}

impl SkillDto {
    pub fn from_entity(skill: &Skill) -> Self {
        Self {
            id: skill.id(),
            name: skill.name().as_str().to_string(),
            category: skill.category().as_str().to_string(),
            aliases: skill.aliases().to_vec(),
            active: skill.is_active(),
        }
    }
}
