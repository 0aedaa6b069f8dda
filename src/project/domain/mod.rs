//! Domain model for project templates.
//!
//! Projects own their step templates. Neither type knows how it is stored;
//! identity is assigned by repository adapters.

mod error;
mod ids;
mod policy;
mod project;
mod read_model;
mod step;

pub use error::ProjectDomainError;
pub use ids::{ProjectId, ProjectStepId};
pub use policy::GroupCreationPolicy;
pub use project::{PersistedProjectData, Project};
pub use read_model::{ProjectReadModel, ProjectStepReadModel};
pub use step::ProjectStep;
