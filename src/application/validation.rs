//! Request validation pipeline.
//!
//! Every command/query passes through [`dispatch`], an explicit decorator
//! composed around the use-case call: the request's declarative rules run
//! first, and a failing request short-circuits to
//! [`Dispatched::Rejected`] before any repository access. Range clamping
//! (page, limit, days) is a policy concern and never rejects; validation
//! covers shape only.

use crate::shared::Result;
use std::fmt;
use std::future::Future;

/// One failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The collected rule failures for a rejected request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the collected failures into the pipeline result
    pub fn into_result(self) -> std::result::Result<(), ValidationFailure> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// Declarative shape rules for a request object
pub trait ValidateRequest {
    fn validate(&self) -> std::result::Result<(), ValidationFailure>;
}

/// Result of running a request through the pipeline
#[derive(Debug)]
pub enum Dispatched<T> {
    /// The request passed validation and the handler produced this value
    Handled(T),
    /// The request was rejected before the handler ran
    Rejected(ValidationFailure),
}

impl<T> Dispatched<T> {
    /// Unwraps the handled value, panicking on a rejection. Test helper.
    #[cfg(test)]
    pub fn unwrap_handled(self) -> T {
        match self {
            Dispatched::Handled(value) => value,
            Dispatched::Rejected(failure) => {
                panic!("request was rejected by validation: {}", failure)
            }
        }
    }
}

/// Runs a request through validation, then the handler.
///
/// Fail fast: a request that violates its shape rules never reaches the
/// handler, so no repository call is made for malformed input.
pub async fn dispatch<R, T, F, Fut>(request: R, handler: F) -> Result<Dispatched<T>>
where
    R: ValidateRequest,
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if let Err(failure) = request.validate() {
        return Ok(Dispatched::Rejected(failure));
    }
    Ok(Dispatched::Handled(handler(request).await?))
}

/// Rule: the field must contain non-whitespace text
pub fn require_text(failure: &mut ValidationFailure, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        failure.push(field, "must not be empty");
    }
}

/// Rule: the field must not exceed `max` bytes
pub fn require_max_length(
    failure: &mut ValidationFailure,
    field: &'static str,
    value: &str,
    max: usize,
) {
    if value.trim().len() > max {
        failure.push(field, format!("must be at most {} characters", max));
    }
}

/// Rule: the field must look like an email address
pub fn require_email_shape(failure: &mut ValidationFailure, field: &'static str, value: &str) {
    let trimmed = value.trim();
    let well_formed = trimmed
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !well_formed {
        failure.push(field, "must be a valid email address");
    }
}

/// Rule: the field must lie within the inclusive range
pub fn require_in_range(
    failure: &mut ValidationFailure,
    field: &'static str,
    value: u8,
    min: u8,
    max: u8,
) {
    if !(min..=max).contains(&value) {
        failure.push(field, format!("must be between {} and {}", min, max));
    }
}
