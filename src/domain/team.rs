//! Teams and matchups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A team as listed by a team source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Full display name, e.g. "New York Knicks".
    pub name: String,
    /// Short code, e.g. "NYK".
    pub abbreviation: String,
    /// Points per 100 possessions scored minus allowed, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_rating: Option<f64>,
}

impl Team {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            net_rating: None,
        }
    }

    #[must_use]
    pub fn with_net_rating(mut self, net_rating: f64) -> Self {
        self.net_rating = Some(net_rating);
        self
    }

    /// Case-insensitive match on full name or abbreviation.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query) || self.abbreviation.eq_ignore_ascii_case(query)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}

/// Home and away team names for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

impl Matchup {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_name_or_abbreviation() {
        let team = Team::new("Miami Heat", "MIA");
        assert!(team.matches("miami heat"));
        assert!(team.matches(" mia "));
        assert!(!team.matches("Miami"));
    }

    #[test]
    fn net_rating_is_optional_in_feeds() {
        let team: Team =
            serde_json::from_str(r#"{"name": "Boston Celtics", "abbreviation": "BOS"}"#).unwrap();
        assert_eq!(team.net_rating, None);
    }

    #[test]
    fn matchup_display() {
        let matchup = Matchup::new("New York Knicks", "Miami Heat");
        assert_eq!(matchup.to_string(), "New York Knicks vs Miami Heat");
    }
}
