//! Pretty-printed JSON reports.

use crate::error::Result;
use crate::port::outbound::report::{ExportFormat, Report, ReportExporter};

/// Writes the full report as indented JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, report: &Report) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{analyze, AnalysisRequest, ModelInput, StakeInput};
    use crate::domain::odds::Side;
    use crate::domain::team::Matchup;

    fn report() -> Report {
        let analysis = analyze(
            &AnalysisRequest::new(Matchup::new("A", "B"), 2.0, 3.0)
                .with_model(ModelInput::Supplied(0.6))
                .with_stake(StakeInput {
                    side: Side::Home,
                    bankroll: 1000.0,
                    kelly_fraction: 0.5,
                }),
        )
        .unwrap();
        Report::new(analysis)
    }

    #[test]
    fn renders_sections_at_top_level() {
        let json = JsonExporter.render(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["generated_at"].is_string());
        assert_eq!(value["matchup"]["home"], "A");
        assert_eq!(value["market"]["home_odds"], 2.0);
        assert_eq!(value["model"]["home"], 0.6);
        assert_eq!(value["model"]["source"], "supplied");
        assert_eq!(value["edge"]["status"], "available");
        assert_eq!(value["stake"]["side"], "home");
    }

    #[test]
    fn renders_verdict_and_raw_edge() {
        let json = JsonExporter.render(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["recommendation"], "no_clear_value");
        assert!(value["edge"]["raw_home"].is_number());
        assert!(json.ends_with('\n'));
    }
}
