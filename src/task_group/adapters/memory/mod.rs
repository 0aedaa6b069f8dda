//! In-memory adapters for task group ports.

mod group;

pub use group::InMemoryTaskGroupRepository;
