use crate::workforce::domain::{
    DepartmentId, Employee, EmployeeId, EmployeeSkill, Role, Skill, SkillId,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Employee response DTO
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDto {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
    pub active: bool,
}

impl EmployeeDto {
    pub fn from_entity(employee: &Employee) -> Self {
        Self {
            id: employee.id(),
            name: employee.name().to_string(),
            email: employee.email().as_str().to_string(),
            role: employee.role(),
            department_id: employee.department_id(),
            active: employee.is_active(),
        }
    }
}

/// One skill on an employee profile
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSkillDto {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub category: String,
    pub level: u8,
    pub manual_override: bool,
    pub extracted_at: DateTime<Utc>,
}

impl EmployeeSkillDto {
    pub fn from_link(link: &EmployeeSkill, skill: &Skill) -> Self {
        Self {
            skill_id: link.skill_id(),
            skill_name: skill.name().as_str().to_string(),
            category: skill.category().as_str().to_string(),
            level: link.level().value(),
            manual_override: link.is_manual_override(),
            extracted_at: link.extracted_at(),
        }
    }
}

/// Full employee profile: the employee, their department name, and their
/// skills sorted by skill name.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeProfileDto {
    #[serde(flatten)]
    pub employee: EmployeeDto,
    pub department_name: Option<String>,
    pub skills: Vec<EmployeeSkillDto>,
}
