use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different kinds of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested operation completed
    Success = 0,
    /// The request referenced an entity that does not exist
    NotFound = 1,
    /// Invalid command-line arguments or a rejected request
    InvalidArguments = 2,
    /// Application error (seed file unreadable, store failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the skillscope CLI.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the messages user-friendly without hand-written impls.
#[derive(Debug, Error)]
pub enum SkillscopeError {
    #[error("Seed data file not found: {path}\n\n💡 Hint: {suggestion}")]
    SeedFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse seed data file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid YAML in the skillscope seed format")]
    SeedParseError { path: PathBuf, details: String },

    #[error("Unknown department: {name}\n\n💡 Hint: Run `skillscope departments` to list the departments in the seed file")]
    UnknownDepartment { name: String },

    #[error("Unknown employee: {name}\n\n💡 Hint: Run `skillscope employees` to list the employees in the seed file")]
    UnknownEmployee { name: String },

    #[error("Unknown skill: {name}\n\n💡 Hint: Run `skillscope skills` to list the taxonomy in the seed file")]
    UnknownSkill { name: String },

    /// Validation error raised when the pipeline rejects a request
    #[error("Validation error: {message}")]
    Validation { message: String },
}
