//! Calculator types and operations.
//!
//! Everything here is synchronous and free of I/O.

pub mod analysis;
pub mod edge;
pub mod error;
pub mod model;
pub mod money;
pub mod odds;
pub mod probability;
pub mod stake;
pub mod team;

pub use analysis::{analyze, Analysis, AnalysisRequest, ModelInput, StakeInput};
pub use edge::{EdgeEstimate, Recommendation};
pub use error::DomainError;
pub use model::{ModelProbabilities, ModelSource, RatingModel};
pub use odds::{Market, OddsQuote, Side};
pub use probability::ImpliedProbabilities;
pub use stake::{ProbabilitySource, StakeRecommendation, StakeRequest};
pub use team::{Matchup, Team};
