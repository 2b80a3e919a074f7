//! Courtedge - matchup odds analysis.
//!
//! Turns a pair of decimal odds into raw and de-margined win probabilities,
//! compares them with an independent model to measure edge, and sizes a
//! Kelly stake for a chosen side.
//!
//! # Architecture
//!
//! - **`domain`** - The calculator: odds, implied probabilities, the rating
//!   model, edge and Kelly sizing. Pure and synchronous.
//! - **`port`** - Traits for team sources and report exporters
//! - **`adapter`** - Team feed and built-in list, JSON/CSV exporters, and the
//!   command line with its interactive dashboard
//! - **`application`** - Team directory and model selection
//! - **`infrastructure`** - Configuration and wiring
//!
//! # Example
//!
//! ```
//! use courtedge::domain::analysis::{analyze, AnalysisRequest, ModelInput, StakeInput};
//! use courtedge::domain::odds::Side;
//! use courtedge::domain::team::Matchup;
//!
//! let request = AnalysisRequest::new(Matchup::new("Home", "Away"), 2.0, 2.0)
//!     .with_model(ModelInput::Supplied(0.7))
//!     .with_stake(StakeInput { side: Side::Home, bankroll: 1000.0, kelly_fraction: 1.0 });
//!
//! let analysis = analyze(&request).unwrap();
//! assert_eq!(analysis.stake.unwrap().stake_amount.to_string(), "400.00");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
