//! Error types for project domain validation.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project description is empty after trimming.
    #[error("project description must not be empty")]
    EmptyDescription,

    /// A step description is empty after trimming.
    #[error("project step description must not be empty")]
    EmptyStepDescription,

    /// Two steps share the same description and deadline offset.
    #[error("duplicate project step '{description}' at {days_to_deadline} days")]
    DuplicateStep {
        /// Description of the repeated step.
        description: String,
        /// Deadline offset of the repeated step.
        days_to_deadline: i32,
    },
}
