//! Seed-file support for the skillscope CLI.
//!
//! The CLI is a demo/diagnostic surface over the in-memory adapters, so
//! it loads its world from a YAML seed file (`skillscope.data.yml`):
//! departments with their required skills, the skill taxonomy, employees
//! with proficiency links, and document upload records.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::SkillscopeError;
use crate::shared::Result;

pub const SEED_FILENAME: &str = "skillscope.data.yml";

/// Top-level seed file schema.
#[derive(Debug, Deserialize, Default)]
pub struct SeedFile {
    #[serde(default)]
    pub departments: Vec<SeedDepartment>,
    #[serde(default)]
    pub skills: Vec<SeedSkill>,
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
    #[serde(default)]
    pub documents: Vec<SeedDocument>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDepartment {
    pub name: String,
    /// Required skills, referenced by skill name
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedSkill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub inactive: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedEmployee {
    pub name: String,
    pub email: String,
    /// admin, manager, or member
    #[serde(default = "default_role")]
    pub role: String,
    /// Department referenced by name
    pub department: Option<String>,
    #[serde(default)]
    pub skills: Vec<SeedEmployeeSkill>,
    #[serde(default)]
    pub inactive: bool,
}

fn default_role() -> String {
    "member".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SeedEmployeeSkill {
    /// Skill referenced by name
    pub skill: String,
    pub level: u8,
}

#[derive(Debug, Deserialize)]
pub struct SeedDocument {
    /// resume, certification, or review
    #[serde(rename = "type")]
    pub document_type: String,
    pub filename: String,
    /// Days before today the upload happened (0 = today)
    #[serde(default)]
    pub days_ago: u32,
    /// pending, processing, completed, or failed (defaults to pending)
    pub status: Option<String>,
    pub error: Option<String>,
}

/// Load a seed file from an explicit path. Returns an error if the file
/// is not found.
pub fn load_seed_from_path(path: &Path) -> Result<SeedFile> {
    if !path.exists() {
        return Err(SkillscopeError::SeedFileNotFound {
            path: path.to_path_buf(),
            suggestion: format!(
                "Create a {} file or pass --data with the path to an existing seed file",
                SEED_FILENAME
            ),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let seed: SeedFile =
        serde_yaml_ng::from_str(&content).map_err(|e| SkillscopeError::SeedParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_seed(&seed)?;
    warn_unknown_fields(&seed);

    Ok(seed)
}

/// Auto-discover a seed file in a directory. Returns `None` silently if
/// not found.
pub fn discover_seed(dir: &Path) -> Result<Option<SeedFile>> {
    let seed_path = dir.join(SEED_FILENAME);

    if !seed_path.exists() {
        return Ok(None);
    }

    let seed = load_seed_from_path(&seed_path)?;
    Ok(Some(seed))
}

/// Validate cross-references inside the seed file before any store is
/// touched, so a broken file fails as a whole.
fn validate_seed(seed: &SeedFile) -> Result<()> {
    let skill_names: Vec<String> = seed.skills.iter().map(|s| s.name.to_lowercase()).collect();
    let department_names: Vec<String> = seed
        .departments
        .iter()
        .map(|d| d.name.to_lowercase())
        .collect();

    for department in &seed.departments {
        for required in &department.required_skills {
            if !skill_names.contains(&required.to_lowercase()) {
                anyhow::bail!(
                    "Invalid seed: department '{}' requires unknown skill '{}'.\n\n\
                     💡 Hint: Every required_skills entry must name a skill listed under 'skills'.",
                    department.name,
                    required
                );
            }
        }
    }

    for employee in &seed.employees {
        if let Some(department) = &employee.department {
            if !department_names.contains(&department.to_lowercase()) {
                return Err(SkillscopeError::UnknownDepartment {
                    name: department.clone(),
                }
                .into());
            }
        }
        for skill in &employee.skills {
            if !skill_names.contains(&skill.skill.to_lowercase()) {
                anyhow::bail!(
                    "Invalid seed: employee '{}' references unknown skill '{}'.\n\n\
                     💡 Hint: Every employee skill must name a skill listed under 'skills'.",
                    employee.name,
                    skill.skill
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the seed file.
fn warn_unknown_fields(seed: &SeedFile) {
    for key in seed.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown seed field '{}' will be ignored.", key);
    }
}
