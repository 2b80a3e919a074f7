//! Interactive analysis session.
//!
//! Walks the user through a matchup with prompts, renders the analysis with
//! the same tables as `analyze`, and optionally exports the result to the
//! report directory. Answers are saved so the next session starts where this
//! one ended.

mod prompt;
mod session;

pub mod handler;

pub use session::{ModelMode, Session};
