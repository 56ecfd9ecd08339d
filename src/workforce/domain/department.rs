use crate::shared::Result;
use crate::workforce::domain::ids::DepartmentId;

/// Maximum length for department names
const MAX_DEPARTMENT_NAME_LENGTH: usize = 200;

/// NewType wrapper for department name with validation
///
/// Department names are unique across the organization; uniqueness is
/// compared on the normalized (lowercased, trimmed) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentName(String);

impl DepartmentName {
    pub fn new(name: String) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Department name cannot be empty");
        }

        if trimmed.len() > MAX_DEPARTMENT_NAME_LENGTH {
            anyhow::bail!(
                "Department name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_DEPARTMENT_NAME_LENGTH
            );
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized form used for uniqueness comparison
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Department entity
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    id: DepartmentId,
    name: DepartmentName,
}

impl Department {
    pub fn new(name: DepartmentName) -> Self {
        Self {
            id: DepartmentId::new(),
            name,
        }
    }

    pub fn id(&self) -> DepartmentId {
        self.id
    }

    pub fn name(&self) -> &DepartmentName {
        &self.name
    }

    pub fn rename(&mut self, name: DepartmentName) {
        self.name = name;
    }
}
