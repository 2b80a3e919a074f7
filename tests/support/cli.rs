use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use serde_json::Value;

/// Parse the single JSON document a `--json` command printed.
pub fn stdout_json(assert: &Assert) -> Value {
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout is not one JSON document ({e}): {stdout}"))
}

/// Write a two-team feed for the default Knicks/Heat matchup.
pub fn write_feed(dir: &Path, knicks_rating: f64, heat_rating: f64) -> PathBuf {
    let path = dir.join("teams.json");
    let feed = serde_json::json!([
        { "name": "New York Knicks", "abbreviation": "NYK", "net_rating": knicks_rating },
        { "name": "Miami Heat", "abbreviation": "MIA", "net_rating": heat_rating },
    ]);
    fs::write(&path, feed.to_string()).expect("write team feed");
    path
}
