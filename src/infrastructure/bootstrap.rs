//! Infrastructure bootstrap helpers for adapter wiring.

use std::path::Path;

use crate::adapter::outbound::report::{CsvExporter, JsonExporter};
use crate::adapter::outbound::teams::StaticTeamSource;
use crate::application::directory::TeamDirectory;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::report::{export_all, ExportFormat, Report, ReportExporter};
use crate::port::outbound::teams::TeamSource;

/// Build the team directory: configured feed first, built-in list second.
///
/// # Errors
///
/// Returns an error only if the built-in list is unavailable, which it
/// never is.
pub fn team_directory(config: &Config) -> Result<TeamDirectory> {
    let feed = config.teams.feed_source();
    let primary = feed.as_ref().map(|source| source as &dyn TeamSource);
    TeamDirectory::resolve(primary, &StaticTeamSource)
}

/// Exporter for a report format.
#[must_use]
pub fn exporter(format: ExportFormat) -> Box<dyn ReportExporter> {
    match format {
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Csv => Box::new(CsvExporter),
    }
}

/// Write `report` in every requested format, all or nothing.
///
/// # Errors
///
/// Returns the first rendering or filesystem error; see [`export_all`].
pub fn export_reports(report: &Report, requested: &[(ExportFormat, &Path)]) -> Result<()> {
    let exporters: Vec<Box<dyn ReportExporter>> = requested
        .iter()
        .map(|(format, _)| exporter(*format))
        .collect();
    let targets: Vec<(&dyn ReportExporter, &Path)> = exporters
        .iter()
        .zip(requested)
        .map(|(exporter, (_, path))| (&**exporter, *path))
        .collect();
    export_all(report, &targets)
}
