//! Infrastructure configuration modules.

pub mod logging;
pub mod model;
pub mod reports;
pub mod settings;
pub mod staking;
pub mod teams;
