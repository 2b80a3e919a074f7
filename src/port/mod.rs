//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where external collaborators plug in. The calculator
//! itself needs none of them; they serve the command line and dashboard.
//!
//! # Available Ports
//!
//! - [`TeamSource`] - Team lists for matchup selection
//! - [`ReportExporter`] - Writing a finished analysis to disk

pub mod outbound;

pub use outbound::report::{ExportFormat, Report, ReportExporter};
pub use outbound::teams::TeamSource;
