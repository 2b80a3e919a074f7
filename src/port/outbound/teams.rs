//! Team list port.

use crate::domain::team::Team;
use crate::error::Result;

/// A provider of the teams a matchup can be built from.
///
/// Implementations report unavailability as an error; the caller decides
/// whether to fall back to another source.
pub trait TeamSource {
    /// Short name used in logs and output.
    fn name(&self) -> &str;

    /// Load every team this source knows about.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::TeamSource`] when the source cannot
    /// answer right now.
    fn load(&self) -> Result<Vec<Team>>;
}
