//! Stepwise: project templates instantiated into deadline-driven task groups.
//!
//! A project describes a reusable plan as a set of steps, each offset by a
//! number of days from a reference date. Instantiating a project produces a
//! task group whose tasks carry absolute deadlines and completion state.
//!
//! # Architecture
//!
//! Stepwise follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`project`]: Project templates and group instantiation
//! - [`task_group`]: Task groups, tasks, and completion tracking
//! - [`config`]: TOML-backed task configuration
//! - [`telemetry`]: Tracing subscriber bootstrap

pub mod config;
pub mod project;
pub mod task_group;
pub mod telemetry;
