//! Application services for project templates.

mod project;

pub use project::{CreateProjectRequest, ProjectService, ProjectServiceError, ProjectServiceResult};
