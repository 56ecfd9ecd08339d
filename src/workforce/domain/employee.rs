use crate::shared::Result;
use crate::workforce::domain::ids::{DepartmentId, EmployeeId};
use serde::{Deserialize, Serialize};

/// Maximum length for email addresses (RFC 5321 limit)
const MAX_EMAIL_LENGTH: usize = 320;

/// Account role, ordered from most to least privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "member" => Ok(Role::Member),
            _ => Err(format!(
                "Invalid role: {}. Please specify 'admin', 'manager' or 'member'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Member => write!(f, "member"),
        }
    }
}

/// NewType wrapper for email addresses with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: String) -> Result<Self> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Email address cannot be empty");
        }

        if trimmed.len() > MAX_EMAIL_LENGTH {
            anyhow::bail!(
                "Email address is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_EMAIL_LENGTH
            );
        }

        // Shape check only: one '@' with non-empty local part and a domain
        // containing a dot. Full RFC validation is the directory's job.
        let Some((local, domain)) = trimmed.split_once('@') else {
            anyhow::bail!("Email address must contain '@': {}", trimmed);
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            anyhow::bail!("Email address is malformed: {}", trimmed);
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

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee entity: an account in the organization directory with an
/// optional department association and an active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: EmailAddress,
    role: Role,
    department_id: Option<DepartmentId>,
    active: bool,
}

impl Employee {
    pub fn new(
        name: String,
        email: EmailAddress,
        role: Role,
        department_id: Option<DepartmentId>,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            name,
            email,
            role,
            department_id,
            active: true,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub fn assign_department(&mut self, department_id: Option<DepartmentId>) {
        self.department_id = department_id;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
