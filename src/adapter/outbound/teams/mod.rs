//! Team source adapters.
//!
//! - [`FeedTeamSource`] reads the team feed written by an external collector.
//! - [`StaticTeamSource`] serves the built-in league list and is always
//!   available.

mod feed;
mod fixed;

pub use feed::FeedTeamSource;
pub use fixed::StaticTeamSource;
