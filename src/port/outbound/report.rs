//! Report export port.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::analysis::Analysis;
use crate::error::Result;

/// A finished analysis stamped with its creation time.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: Analysis,
}

impl Report {
    #[must_use]
    pub fn new(analysis: Analysis) -> Self {
        Self {
            generated_at: Utc::now(),
            analysis,
        }
    }
}

/// On-disk report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Csv => f.write_str("CSV"),
        }
    }
}

/// Renders a report in one file format.
pub trait ReportExporter {
    fn format(&self) -> ExportFormat;

    /// Render the report to a string in this exporter's format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render(&self, report: &Report) -> Result<String>;
}

/// Write `report` once per target, all or nothing.
///
/// Every target is rendered before any file is touched. Each file is then
/// staged beside its destination and the staged files are moved into place
/// only after all of them were written.
///
/// # Errors
///
/// Returns the first rendering or filesystem error. Staged files are
/// removed and no destination is written when staging fails.
pub fn export_all(report: &Report, targets: &[(&dyn ReportExporter, &Path)]) -> Result<()> {
    let mut rendered = Vec::with_capacity(targets.len());
    for (exporter, path) in targets {
        rendered.push((*path, exporter.render(report)?));
        debug!(format = %exporter.format(), path = %path.display(), "rendered report");
    }

    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(rendered.len());
    for (path, content) in &rendered {
        match stage(path, content) {
            Ok(staging) => staged.push((staging, *path)),
            Err(e) => {
                for (staging, _) in &staged {
                    let _ = std::fs::remove_file(staging);
                }
                return Err(e);
            }
        }
    }

    for (staging, path) in staged {
        std::fs::rename(&staging, path)?;
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "report".into(), |name| name.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}

fn stage(path: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let staging = staging_path(path);
    std::fs::write(&staging, content)?;
    Ok(staging)
}
