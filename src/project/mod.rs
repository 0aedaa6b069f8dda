//! Project templates for Stepwise.
//!
//! A project is a named set of step templates. Creating a task group from a
//! project copies every step into a task whose deadline is offset from a
//! caller-supplied reference date, subject to the configured group policy.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
