//! Single-row CSV reports.

use csv::Writer;

use crate::domain::odds::Side;
use crate::error::{Error, Result};
use crate::port::outbound::report::{ExportFormat, Report, ReportExporter};

const HEADER: [&str; 21] = [
    "home",
    "away",
    "home_odds",
    "away_odds",
    "implied_home",
    "implied_away",
    "overround",
    "fair_home",
    "fair_away",
    "model_home",
    "model_away",
    "edge_home",
    "edge_away",
    "edge_raw_home",
    "edge_raw_away",
    "edge_available",
    "recommendation",
    "bet_side",
    "full_kelly",
    "fraction_of_bankroll",
    "stake_amount",
];

/// Writes one header row and one data row. Absent values are empty cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ReportExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, report: &Report) -> Result<String> {
        let analysis = &report.analysis;
        let implied = &analysis.implied;
        let edge = &analysis.edge;
        let stake = analysis.stake.as_ref();

        let row: [String; 21] = [
            analysis.matchup.home.clone(),
            analysis.matchup.away.clone(),
            analysis.market.home_odds().value().to_string(),
            analysis.market.away_odds().value().to_string(),
            implied.home_raw.to_string(),
            implied.away_raw.to_string(),
            implied.overround.to_string(),
            implied.home.to_string(),
            implied.away.to_string(),
            optional(analysis.model.map(|m| m.home)),
            optional(analysis.model.map(|m| m.away)),
            optional(edge.get(Side::Home)),
            optional(edge.get(Side::Away)),
            optional(edge.raw(Side::Home)),
            optional(edge.raw(Side::Away)),
            edge.is_available().to_string(),
            optional(analysis.recommendation.map(|r| r.as_str())),
            optional(stake.map(|s| s.side)),
            optional(stake.map(|s| s.full_kelly)),
            optional(stake.map(|s| s.fraction_of_bankroll)),
            optional(stake.map(|s| s.stake_amount)),
        ];

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;
        writer.write_record(&row)?;
        writer.flush()?;

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
