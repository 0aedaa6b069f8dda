//! Task groups and their tasks.
//!
//! A task group bundles tasks that share a lifecycle. Groups are either
//! created directly from an explicit task list or instantiated from a
//! project by [`crate::project::services::ProjectService`]. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
