use crate::shared::Result;
use crate::workforce::domain::ids::SkillId;

/// Maximum length for skill names and categories
const MAX_SKILL_NAME_LENGTH: usize = 120;

/// NewType wrapper for skill name with validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillName(String);

impl SkillName {
    pub fn new(name: String) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Skill name cannot be empty");
        }

        if trimmed.len() > MAX_SKILL_NAME_LENGTH {
            anyhow::bail!(
                "Skill name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_SKILL_NAME_LENGTH
            );
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SkillName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for skill category with validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory(String);

impl SkillCategory {
    pub fn new(category: String) -> Result<Self> {
        let trimmed = category.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Skill category cannot be empty");
        }

        if trimmed.len() > MAX_SKILL_NAME_LENGTH {
            anyhow::bail!(
                "Skill category is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_SKILL_NAME_LENGTH
            );
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skill entity: one taxonomy entry with its alias list.
///
/// Uniqueness is on the (name, category) pair, compared case-insensitively.
/// The alias list always contains the skill's own name so alias matching
/// never misses the canonical spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    id: SkillId,
    name: SkillName,
    category: SkillCategory,
    aliases: Vec<String>,
    active: bool,
}

impl Skill {
    pub fn new(name: SkillName, category: SkillCategory, aliases: Vec<String>) -> Self {
        let aliases = normalize_aliases(name.as_str(), aliases);
        Self {
            id: SkillId::new(),
            name,
            category,
            aliases,
            active: true,
        }
    }

    pub fn id(&self) -> SkillId {
        self.id
    }

    pub fn name(&self) -> &SkillName {
        &self.name
    }

    pub fn category(&self) -> &SkillCategory {
        &self.category
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Uniqueness key: lowercased (name, category) pair
    pub fn identity_key(&self) -> (String, String) {
        identity_key(self.name.as_str(), self.category.as_str())
    }

    pub fn rename(&mut self, name: SkillName) {
        self.name = name;
        self.aliases = normalize_aliases(self.name.as_str(), std::mem::take(&mut self.aliases));
    }

    pub fn recategorize(&mut self, category: SkillCategory) {
        self.category = category;
    }

    pub fn replace_aliases(&mut self, aliases: Vec<String>) {
        self.aliases = normalize_aliases(self.name.as_str(), aliases);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Builds the uniqueness key for a (name, category) pair
pub fn identity_key(name: &str, category: &str) -> (String, String) {
    (name.to_lowercase(), category.to_lowercase())
}

/// Normalizes an alias list: trims entries, drops empties, de-duplicates
/// case-insensitively keeping the first-seen casing, and guarantees the
/// skill's own name is present.
fn normalize_aliases(name: &str, aliases: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result: Vec<String> = Vec::new();

    let mut push = |candidate: &str, seen: &mut Vec<String>, result: &mut Vec<String>| {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return;
        }
        let folded = trimmed.to_lowercase();
        if seen.contains(&folded) {
            return;
        }
        seen.push(folded);
        result.push(trimmed.to_string());
    };

    push(name, &mut seen, &mut result);
    for alias in &aliases {
        push(alias, &mut seen, &mut result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str, aliases: &[&str]) -> Skill {
        Skill::new(
            SkillName::new(name.to_string()).unwrap(),
            SkillCategory::new(category.to_string()).unwrap(),
            aliases.iter().map(|a| a.to_string()).collect(),
        )
    }

    #[test]
    fn test_skill_name_rejects_empty() {
        assert!(SkillName::new("  ".to_string()).is_err());
    }

    #[test]
    fn test_aliases_include_own_name() {
        let skill = skill("PostgreSQL", "Databases", &["postgres", "pg"]);
        assert_eq!(skill.aliases(), &["PostgreSQL", "postgres", "pg"]);
    }

    #[test]
    fn test_aliases_deduplicate_case_insensitively() {
        let skill = skill("SQL", "Databases", &["sql", "SQL ", "Sequel"]);
        assert_eq!(skill.aliases(), &["SQL", "Sequel"]);
    }

    #[test]
    fn test_aliases_drop_blank_entries() {
        let skill = skill("Rust", "Languages", &["", "   ", "rustlang"]);
        assert_eq!(skill.aliases(), &["Rust", "rustlang"]);
    }

    #[test]
    fn test_identity_key_is_case_insensitive() {
        let a = skill("Rust", "Languages", &[]);
        let b = skill("RUST", "languages", &[]);
        assert_eq!(a.identity_key(), b.identity_key());
    }

    #[test]
    fn test_rename_renormalizes_aliases() {
        let mut skill = skill("Postgres", "Databases", &["pg"]);
        skill.rename(SkillName::new("PostgreSQL".to_string()).unwrap());
        assert_eq!(skill.name().as_str(), "PostgreSQL");
        // Old name survives as an alias, new name leads the list
        assert_eq!(skill.aliases(), &["PostgreSQL", "Postgres", "pg"]);
    }

    #[test]
    fn test_replace_aliases_keeps_own_name() {
        let mut skill = skill("Rust", "Languages", &["rustlang"]);
        skill.replace_aliases(vec!["rs".to_string()]);
        assert_eq!(skill.aliases(), &["Rust", "rs"]);
    }
}
