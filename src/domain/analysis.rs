//! The edge and stake calculator.
//!
//! [`analyze`] is the single entry point shared by the command line and the
//! interactive dashboard. It is a pure function of its request and returns
//! no partial result on failure.

use serde::Serialize;
use tracing::debug;

use super::edge::{EdgeEstimate, Recommendation, DEFAULT_EDGE_THRESHOLD};
use super::error::DomainError;
use super::model::{ModelProbabilities, ModelSource};
use super::odds::{Market, Side};
use super::probability::ImpliedProbabilities;
use super::stake::{ProbabilitySource, StakeRecommendation, StakeRequest};
use super::team::Matchup;

/// Independent model input for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ModelInput {
    /// No independent model; the edge will be unavailable.
    #[default]
    Absent,
    /// A caller-provided home-win probability, validated during analysis.
    Supplied(f64),
    /// A ready estimate, typically from the rating model.
    Estimated(ModelProbabilities),
}

/// Unvalidated stake sizing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StakeInput {
    pub side: Side,
    pub bankroll: f64,
    pub kelly_fraction: f64,
}

/// Everything the calculator needs for one matchup.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub matchup: Matchup,
    pub home_odds: f64,
    pub away_odds: f64,
    pub model: ModelInput,
    pub stake: Option<StakeInput>,
    /// Home-edge magnitude that separates a verdict from no clear value.
    pub edge_threshold: f64,
}

impl AnalysisRequest {
    pub fn new(matchup: Matchup, home_odds: f64, away_odds: f64) -> Self {
        Self {
            matchup,
            home_odds,
            away_odds,
            model: ModelInput::Absent,
            stake: None,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: ModelInput) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_stake(mut self, stake: StakeInput) -> Self {
        self.stake = Some(stake);
        self
    }

    #[must_use]
    pub fn with_edge_threshold(mut self, threshold: f64) -> Self {
        self.edge_threshold = threshold;
        self
    }
}

/// Calculator output handed to the CLI and dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub matchup: Matchup,
    pub market: Market,
    pub implied: ImpliedProbabilities,
    pub model: Option<ModelProbabilities>,
    pub edge: EdgeEstimate,
    /// Verdict on the home side; `None` without a model.
    pub recommendation: Option<Recommendation>,
    pub stake: Option<StakeRecommendation>,
}

/// Run the calculator.
///
/// All inputs are validated before anything is computed, in this order:
/// odds, model probability, edge threshold, bankroll, Kelly fraction.
///
/// Kelly sizing uses the model probability for the chosen side when a model
/// exists and the de-margined market probability otherwise.
///
/// # Errors
///
/// Any [`DomainError`] raised by validation; see the variant docs.
pub fn analyze(request: &AnalysisRequest) -> Result<Analysis, DomainError> {
    let market = Market::try_new(request.home_odds, request.away_odds)?;

    let model = match request.model {
        ModelInput::Absent => None,
        ModelInput::Supplied(home) => Some(ModelProbabilities::from_home(
            home,
            ModelSource::Supplied,
        )?),
        ModelInput::Estimated(model) => Some(model),
    };

    let threshold = request.edge_threshold;
    if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
        return Err(DomainError::InvalidEdgeThreshold { threshold });
    }

    let stake_request = request
        .stake
        .map(|s| StakeRequest::try_new(s.side, s.bankroll, s.kelly_fraction))
        .transpose()?;

    let implied = ImpliedProbabilities::from_market(&market)?;
    let edge = EdgeEstimate::measure(&implied, model.as_ref());
    let recommendation = edge.recommend(threshold);

    let stake = stake_request
        .map(|stake_request| {
            let side = stake_request.side();
            let (probability, source) = match &model {
                Some(model) => (
                    model.probability(side),
                    ProbabilitySource::Model(model.source),
                ),
                None => (implied.normalized(side), ProbabilitySource::Market),
            };
            StakeRecommendation::size(&stake_request, probability, source, market.odds(side))
        })
        .transpose()?;

    debug!(
        matchup = %request.matchup,
        edge_available = edge.is_available(),
        recommendation = recommendation.map(Recommendation::as_str),
        staked = stake.is_some(),
        "analysis complete"
    );

    Ok(Analysis {
        matchup: request.matchup.clone(),
        market,
        implied,
        model,
        edge,
        recommendation,
        stake,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RatingModel;
    use rust_decimal_macros::dec;

    fn request(home_odds: f64, away_odds: f64) -> AnalysisRequest {
        AnalysisRequest::new(
            Matchup::new("New York Knicks", "Miami Heat"),
            home_odds,
            away_odds,
        )
    }

    #[test]
    fn market_only_analysis() {
        let analysis = analyze(&request(1.53, 4.50)).unwrap();

        assert!((analysis.implied.home - 0.7463).abs() < 1e-3);
        assert!(analysis.model.is_none());
        assert_eq!(analysis.edge, EdgeEstimate::Unavailable);
        assert!(analysis.stake.is_none());
    }

    #[test]
    fn supplied_model_produces_edge() {
        let analysis = analyze(&request(2.0, 3.0).with_model(ModelInput::Supplied(0.6))).unwrap();

        // fair home = (1/2) / (1/2 + 1/3) = 0.6
        let edge = analysis.edge.get(Side::Home).unwrap();
        assert!(edge.abs() < 1e-12);
        assert!(analysis.edge.is_available());
    }

    #[test]
    fn estimated_model_is_passed_through() {
        let estimate = RatingModel::default()
            .estimate(Some(6.0), Some(-2.0))
            .unwrap();
        let analysis =
            analyze(&request(1.53, 4.50).with_model(ModelInput::Estimated(estimate))).unwrap();

        assert_eq!(analysis.model, Some(estimate));
        assert!(matches!(
            analysis.edge,
            EdgeEstimate::Available {
                source: ModelSource::Rating,
                ..
            }
        ));
    }

    #[test]
    fn stake_uses_model_probability_when_present() {
        let analysis = analyze(
            &request(2.0, 2.0)
                .with_model(ModelInput::Supplied(0.7))
                .with_stake(StakeInput {
                    side: Side::Home,
                    bankroll: 1000.0,
                    kelly_fraction: 1.0,
                }),
        )
        .unwrap();

        let stake = analysis.stake.unwrap();
        assert_eq!(
            stake.probability_source,
            ProbabilitySource::Model(ModelSource::Supplied)
        );
        assert_eq!(stake.stake_amount, dec!(400));
    }

    #[test]
    fn stake_falls_back_to_market_probability() {
        let analysis = analyze(&request(1.53, 4.50).with_stake(StakeInput {
            side: Side::Home,
            bankroll: 1000.0,
            kelly_fraction: 1.0,
        }))
        .unwrap();

        let stake = analysis.stake.unwrap();
        assert_eq!(stake.probability_source, ProbabilitySource::Market);
        assert!((stake.probability - analysis.implied.home).abs() < 1e-12);
        assert!(stake.full_kelly > 0.0);
    }

    #[test]
    fn stake_for_unfavored_side_is_zero() {
        let analysis = analyze(
            &request(1.53, 4.50)
                .with_model(ModelInput::Supplied(0.9))
                .with_stake(StakeInput {
                    side: Side::Away,
                    bankroll: 500.0,
                    kelly_fraction: 0.5,
                }),
        )
        .unwrap();

        assert!(analysis.stake.unwrap().is_no_bet());
    }

    #[test]
    fn invalid_odds_fail_without_partial_result() {
        for bad in [1.0, 0.9, -2.0, f64::NAN, f64::INFINITY] {
            let result = analyze(&request(bad, 2.0));
            assert!(
                matches!(result, Err(DomainError::InvalidOdds { side: Side::Home, .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_model_probability_fails() {
        let result = analyze(&request(2.0, 2.0).with_model(ModelInput::Supplied(1.2)));
        assert_eq!(result, Err(DomainError::InvalidProbability { value: 1.2 }));
    }

    #[test]
    fn invalid_stake_inputs_fail() {
        let negative = analyze(&request(2.0, 2.0).with_stake(StakeInput {
            side: Side::Home,
            bankroll: -5.0,
            kelly_fraction: 0.5,
        }));
        assert!(matches!(negative, Err(DomainError::InvalidBankroll { .. })));

        let oversized = analyze(&request(2.0, 2.0).with_stake(StakeInput {
            side: Side::Home,
            bankroll: 5.0,
            kelly_fraction: 2.0,
        }));
        assert!(matches!(
            oversized,
            Err(DomainError::InvalidKellyFraction { .. })
        ));
    }

    #[test]
    fn recommendation_uses_request_threshold() {
        // fair home 0.5, model 0.58: home edge 0.08
        let base = request(2.0, 2.0).with_model(ModelInput::Supplied(0.58));

        let default = analyze(&base).unwrap();
        assert_eq!(default.recommendation, Some(Recommendation::PositiveEdge));

        let strict = analyze(&base.clone().with_edge_threshold(0.1)).unwrap();
        assert_eq!(strict.recommendation, Some(Recommendation::NoClearValue));

        let market_only = analyze(&request(2.0, 2.0)).unwrap();
        assert_eq!(market_only.recommendation, None);
    }

    #[test]
    fn invalid_edge_threshold_fails() {
        for bad in [-0.01, 1.0, f64::NAN] {
            let result = analyze(&request(2.0, 2.0).with_edge_threshold(bad));
            assert!(
                matches!(result, Err(DomainError::InvalidEdgeThreshold { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn oversized_bankroll_fails_instead_of_sizing_zero() {
        let result = analyze(&request(2.0, 2.0).with_model(ModelInput::Supplied(0.7)).with_stake(
            StakeInput {
                side: Side::Home,
                bankroll: 1e30,
                kelly_fraction: 1.0,
            },
        ));
        assert_eq!(result, Err(DomainError::InvalidBankroll { bankroll: 1e30 }));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let req = request(1.87, 2.05)
            .with_model(ModelInput::Supplied(0.55))
            .with_stake(StakeInput {
                side: Side::Away,
                bankroll: 250.0,
                kelly_fraction: 0.25,
            });

        assert_eq!(analyze(&req).unwrap(), analyze(&req).unwrap());
    }
}
