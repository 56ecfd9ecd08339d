use crate::workforce::domain::{Department, DepartmentId};
use serde::Serialize;

/// Department response DTO
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentDto {
    pub id: DepartmentId,
    pub name: String,
}

impl DepartmentDto {
    pub fn from_entity(department: &Department) -> Self {
        Self {
            id: department.id(),
            name: department.name().as_str().to_string(),
        }
    }
}
