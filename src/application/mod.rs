//! Application services (use cases).
//!
//! These services coordinate domain logic with the team and report adapters
//! on behalf of the command line and the dashboard.

pub mod directory;
pub mod modeling;
