use crate::shared::Result;
use crate::workforce::domain::ids::{EmployeeId, SkillId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// NewType wrapper for proficiency level, valid range 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProficiencyLevel(u8);

impl ProficiencyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            anyhow::bail!(
                "Proficiency level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            );
        }
        Ok(Self(level))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// EmployeeSkill: the employee↔skill join with proficiency tracking.
///
/// `manual_override` records that a human set the level, so a later
/// extraction run must not overwrite it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSkill {
    employee_id: EmployeeId,
    skill_id: SkillId,
    level: ProficiencyLevel,
    manual_override: bool,
    extracted_at: DateTime<Utc>,
}

impl EmployeeSkill {
    /// Creates a link produced by the extraction engine
    pub fn extracted(
        employee_id: EmployeeId,
        skill_id: SkillId,
        level: ProficiencyLevel,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id,
            skill_id,
            level,
            manual_override: false,
            extracted_at,
        }
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn skill_id(&self) -> SkillId {
        self.skill_id
    }

    pub fn level(&self) -> ProficiencyLevel {
        self.level
    }

    pub fn is_manual_override(&self) -> bool {
        self.manual_override
    }

    pub fn extracted_at(&self) -> DateTime<Utc> {
        self.extracted_at
    }

    /// Applies a human correction: sets the level, marks the link as
    /// manually overridden, and refreshes the timestamp.
    pub fn override_level(&mut self, level: ProficiencyLevel, at: DateTime<Utc>) {
        self.level = level;
        self.manual_override = true;
        self.extracted_at = at;
    }
}
