//! Human-readable rendering of an [`Analysis`].
//!
//! Shared by `analyze` and the dashboard so both show the same tables.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::analysis::Analysis;
use crate::domain::edge::Recommendation;
use crate::domain::odds::Side;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Implied")]
    implied: String,
    #[tabled(rename = "Fair")]
    fair: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Edge")]
    edge: String,
    #[tabled(rename = "Edge (raw)")]
    raw_edge: String,
}

/// Format a probability as a percentage with one decimal.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format an edge as signed percentage points.
#[must_use]
pub fn signed_points(value: f64) -> String {
    format!("{:+.1} pp", value * 100.0)
}

fn colored_edge(value: f64) -> String {
    let text = signed_points(value);
    if value > 0.0 {
        output::positive(text)
    } else if value < 0.0 {
        output::negative(text)
    } else {
        text
    }
}

fn recommendation_text(recommendation: Recommendation) -> String {
    let text = recommendation.describe();
    match recommendation {
        Recommendation::PositiveEdge => output::positive(text),
        Recommendation::Avoid => output::negative(text),
        Recommendation::NoClearValue => text.to_string(),
    }
}

fn market_rows(analysis: &Analysis) -> Vec<MarketRow> {
    Side::ALL
        .iter()
        .map(|&side| {
            let team = match side {
                Side::Home => analysis.matchup.home.clone(),
                Side::Away => analysis.matchup.away.clone(),
            };
            MarketRow {
                side: side.as_str(),
                team,
                odds: analysis.market.odds(side).to_string(),
                implied: percent(analysis.implied.raw(side)),
                fair: percent(analysis.implied.normalized(side)),
                model: analysis
                    .model
                    .map(|m| percent(m.probability(side)))
                    .unwrap_or_else(|| "-".to_string()),
                edge: analysis
                    .edge
                    .get(side)
                    .map(colored_edge)
                    .unwrap_or_else(|| "-".to_string()),
                raw_edge: analysis
                    .edge
                    .raw(side)
                    .map(signed_points)
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect()
}

/// Market table as a string, without indentation.
#[must_use]
pub fn market_table(analysis: &Analysis) -> String {
    Table::new(market_rows(analysis)).to_string()
}

/// Print the full analysis: market table, margin, model note, stake.
pub fn print_analysis(analysis: &Analysis) {
    output::section(&analysis.matchup.to_string());
    output::lines(&market_table(analysis));

    output::field("Overround", format!("{:.4}", analysis.implied.overround));
    output::field("Margin", signed_points(analysis.implied.margin()));

    match analysis.model {
        Some(model) => output::field("Model", model.source.as_str()),
        None => output::note("no independent model: edge unavailable"),
    }
    if let Some(side) = analysis.edge.favored_side() {
        output::field("Favored", output::highlight(side));
    }
    if let Some(recommendation) = analysis.recommendation {
        output::field("Recommendation", recommendation_text(recommendation));
    }

    let Some(stake) = &analysis.stake else {
        return;
    };

    output::section("Stake");
    output::field("Side", stake.side);
    output::field(
        "Probability",
        format!(
            "{} ({})",
            percent(stake.probability),
            stake.probability_source.as_str()
        ),
    );
    output::field("Full Kelly", percent(stake.full_kelly));
    output::field(
        "Fraction",
        format!(
            "{} (x{})",
            percent(stake.fraction_of_bankroll),
            stake.kelly_multiplier
        ),
    );
    output::field("Bankroll", format!("{:.2}", stake.bankroll));
    if stake.is_no_bet() {
        output::field("Stake", output::muted("0.00 (no bet)"));
    } else {
        output::field("Stake", output::highlight(stake.stake_amount));
    }
}
