//! Shared building blocks for the schedule store workspace: logging setup,
//! runtime directory checks and the small wire types used by the HTTP layer.

pub mod types;
pub mod utils;
pub mod env;
