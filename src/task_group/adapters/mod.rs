//! Adapter implementations for task group ports.

pub mod memory;
pub mod postgres;
