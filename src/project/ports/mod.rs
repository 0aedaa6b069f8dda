//! Port contracts for project templates.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod repository;
pub mod settings;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use settings::GroupSettings;

#[cfg(test)]
pub use repository::MockProjectRepository;
#[cfg(test)]
pub use settings::MockGroupSettings;
