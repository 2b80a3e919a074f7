//! Path utilities for courtedge.
//!
//! Per-user state lives under `~/.courtedge/`:
//! - `~/.courtedge/config.toml` - main configuration
//! - `~/.courtedge/session.toml` - last dashboard inputs

use std::path::PathBuf;

/// Returns the courtedge home directory (`~/.courtedge/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".courtedge")
}

/// Returns the default config file path (`~/.courtedge/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default dashboard session path (`~/.courtedge/session.toml`).
pub fn default_session() -> PathBuf {
    home_dir().join("session.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_courtedge_home() {
        let home = home_dir();

        assert!(home.ends_with(".courtedge"));
        assert!(default_config().starts_with(&home));
        assert!(default_session().starts_with(&home));
        assert_eq!(
            default_session().file_name().and_then(|n| n.to_str()),
            Some("session.toml")
        );
    }
}
