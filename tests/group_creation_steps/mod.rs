//! Step definitions for group creation scenarios.

mod given;
mod then;
