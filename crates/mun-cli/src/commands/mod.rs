//! CLI command implementations.

pub mod check;
pub mod serve;
pub mod summary;
