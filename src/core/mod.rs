//! Core business logic module with pure functions
//!
//! Everything here takes inputs and returns outputs without file system or
//! network access, so it can be tested without fixtures on disk.

pub mod capacity;
pub mod phase;
pub mod recommendation;
