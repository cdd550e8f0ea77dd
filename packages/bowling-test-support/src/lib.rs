//! Shared helpers for the bowling backend's integration tests.
//!
//! Kept free of backend types so the assertions check the wire contract
//! rather than the structs that produce it.

pub mod logging;
pub mod problem_details;
