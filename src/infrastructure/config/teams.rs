//! Team source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::adapter::outbound::teams::FeedTeamSource;

/// Where to look for a live team feed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamsConfig {
    /// JSON team feed written by an external collector. Without it only the
    /// built-in list is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<PathBuf>,
}

impl TeamsConfig {
    #[must_use]
    pub fn feed_source(&self) -> Option<FeedTeamSource> {
        self.feed.as_ref().map(FeedTeamSource::new)
    }
}
