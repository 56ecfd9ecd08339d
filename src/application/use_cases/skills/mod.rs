//! Skill taxonomy use cases.
//!
//! Every mutating command ends with a taxonomy-cache invalidation so
//! later alias/category lookups see fresh data.

use crate::application::dto::SkillDto;
use crate::application::validation::{
    require_max_length, require_text, ValidateRequest, ValidationFailure,
};
use crate::ports::outbound::{SkillRepository, TaxonomyCache};
use crate::shared::Result;
use crate::workforce::domain::{skill::identity_key, Skill, SkillCategory, SkillId, SkillName};

const MAX_NAME: usize = 120;

/// Command to add a skill to the taxonomy
#[derive(Debug, Clone)]
pub struct AddSkillCommand {
    pub name: String,
    pub category: String,
    pub aliases: Vec<String>,
}

impl ValidateRequest for AddSkillCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        require_text(&mut failure, "name", &self.name);
        require_max_length(&mut failure, "name", &self.name, MAX_NAME);
        require_text(&mut failure, "category", &self.category);
        require_max_length(&mut failure, "category", &self.category, MAX_NAME);
        failure.into_result()
    }
}

#[derive(Debug)]
pub enum AddSkillOutcome {
    Added(SkillDto),
    DuplicateSkill,
}

/// Adds a skill after checking (name, category) uniqueness
pub struct AddSkillUseCase<S: SkillRepository, C: TaxonomyCache> {
    skills: S,
    taxonomy_cache: C,
}

impl<S: SkillRepository, C: TaxonomyCache> AddSkillUseCase<S, C> {
    pub fn new(skills: S, taxonomy_cache: C) -> Self {
        Self {
            skills,
            taxonomy_cache,
        }
    }

    pub async fn execute(&self, command: AddSkillCommand) -> Result<AddSkillOutcome> {
        let name = SkillName::new(command.name)?;
        let category = SkillCategory::new(command.category)?;

        if self
            .skills
            .find_by_identity(name.as_str(), category.as_str())
            .await?
            .is_some()
        {
            return Ok(AddSkillOutcome::DuplicateSkill);
        }

        let skill = Skill::new(name, category, command.aliases);
        let dto = SkillDto::from_entity(&skill);
        self.skills.insert(skill).await?;
        self.taxonomy_cache.invalidate();

        Ok(AddSkillOutcome::Added(dto))
    }
}

/// Command to update a taxonomy skill. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateSkillCommand {
    pub id: SkillId,
    pub name: Option<String>,
    pub category: Option<String>,
    pub aliases: Option<Vec<String>>,
}

impl ValidateRequest for UpdateSkillCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        if let Some(name) = &self.name {
            require_text(&mut failure, "name", name);
            require_max_length(&mut failure, "name", name, MAX_NAME);
        }
        if let Some(category) = &self.category {
            require_text(&mut failure, "category", category);
            require_max_length(&mut failure, "category", category, MAX_NAME);
        }
        failure.into_result()
    }
}

#[derive(Debug)]
pub enum UpdateSkillOutcome {
    Updated(SkillDto),
    NotFound,
    DuplicateSkill,
}

/// Updates a skill's name, category, or alias list
pub struct UpdateSkillUseCase<S: SkillRepository, C: TaxonomyCache> {
    skills: S,
    taxonomy_cache: C,
}

impl<S: SkillRepository, C: TaxonomyCache> UpdateSkillUseCase<S, C> {
    pub fn new(skills: S, taxonomy_cache: C) -> Self {
        Self {
            skills,
            taxonomy_cache,
        }
    }

    pub async fn execute(&self, command: UpdateSkillCommand) -> Result<UpdateSkillOutcome> {
        let Some(mut skill) = self.skills.get(command.id).await? else {
            return Ok(UpdateSkillOutcome::NotFound);
        };

        let name = match command.name {
            Some(name) => SkillName::new(name)?,
            None => skill.name().clone(),
        };
        let category = match command.category {
            Some(category) => SkillCategory::new(category)?,
            None => skill.category().clone(),
        };

        // Identity changes must not collide with another skill
        if identity_key(name.as_str(), category.as_str()) != skill.identity_key() {
            if let Some(existing) = self
                .skills
                .find_by_identity(name.as_str(), category.as_str())
                .await?
            {
                if existing.id() != skill.id() {
                    return Ok(UpdateSkillOutcome::DuplicateSkill);
                }
            }
        }

        skill.rename(name);
        skill.recategorize(category);
        if let Some(aliases) = command.aliases {
            skill.replace_aliases(aliases);
        }

        let dto = SkillDto::from_entity(&skill);
        self.skills.update(skill).await?;
        self.taxonomy_cache.invalidate();

        Ok(UpdateSkillOutcome::Updated(dto))
    }
}

/// Command to retire a skill from the taxonomy
#[derive(Debug, Clone)]
pub struct DeactivateSkillCommand {
    pub id: SkillId,
}

impl ValidateRequest for DeactivateSkillCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeactivateSkillOutcome {
    Deactivated,
    NotFound,
}

/// Marks a skill inactive. Existing employee links survive; the skill
/// just stops matching in extraction and disappears from default listings.
pub struct DeactivateSkillUseCase<S: SkillRepository, C: TaxonomyCache> {
    skills: S,
    taxonomy_cache: C,
}

impl<S: SkillRepository, C: TaxonomyCache> DeactivateSkillUseCase<S, C> {
    pub fn new(skills: S, taxonomy_cache: C) -> Self {
        Self {
            skills,
            taxonomy_cache,
        }
    }

    pub async fn execute(&self, command: DeactivateSkillCommand) -> Result<DeactivateSkillOutcome> {
        let Some(mut skill) = self.skills.get(command.id).await? else {
            return Ok(DeactivateSkillOutcome::NotFound);
        };

        skill.deactivate();
        self.skills.update(skill).await?;
        self.taxonomy_cache.invalidate();

        Ok(DeactivateSkillOutcome::Deactivated)
    }
}

/// Query for the taxonomy listing
#[derive(Debug, Clone, Default)]
pub struct ListSkillsQuery {
    pub category: Option<String>,
    pub include_inactive: bool,
}

impl ValidateRequest for ListSkillsQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Lists taxonomy skills sorted by (category, name)
pub struct ListSkillsUseCase<S: SkillRepository> {
    skills: S,
}

impl<S: SkillRepository> ListSkillsUseCase<S> {
    pub fn new(skills: S) -> Self {
        Self { skills }
    }

    pub async fn execute(&self, query: ListSkillsQuery) -> Result<Vec<SkillDto>> {
        let mut skills = self
            .skills
            .list(query.category.as_deref(), query.include_inactive)
            .await?;
        skills.sort_by_key(|s| {
            (
                s.category().as_str().to_lowercase(),
                s.name().as_str().to_lowercase(),
            )
        });
        Ok(skills.iter().map(SkillDto::from_entity).collect())
    }
}

#[cfg(test)]
mod tests;
