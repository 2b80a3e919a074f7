//! CLI module graph.

pub mod analyze;
pub mod command;
pub mod config;
pub mod dashboard;
pub mod diagnostic;
pub mod dispatch;
pub mod output;
pub mod paths;
pub mod render;
pub mod teams;
