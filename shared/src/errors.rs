//! Error types for the CalSnap domain

use thiserror::Error;

/// Errors raised when extracting calculation inputs from a stored profile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// One or more biometric fields are absent or non-positive
    #[error("biometric profile incomplete: missing {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

impl ProfileError {
    /// Field names still required before calculations can run
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            ProfileError::Incomplete { missing } => missing,
        }
    }
}
