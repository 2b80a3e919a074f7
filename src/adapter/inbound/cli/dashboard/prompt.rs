//! Dashboard prompts.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::adapter::inbound::cli::output;
use crate::application::directory::TeamDirectory;
use crate::domain::odds::Side;
use crate::error::Result;

use super::session::{ModelMode, Session};

fn team_index(directory: &TeamDirectory, name: &str, fallback: usize) -> usize {
    directory.position(name).unwrap_or(fallback)
}

/// Ask for every input, pre-filled from `previous`.
pub(super) fn prompt_session(
    theme: &ColorfulTheme,
    directory: &TeamDirectory,
    previous: &Session,
) -> Result<Session> {
    let names: Vec<&str> = directory.teams().iter().map(|t| t.name.as_str()).collect();

    output::section("Matchup");
    let home_index = Select::with_theme(theme)
        .with_prompt("Home team")
        .items(&names)
        .default(team_index(directory, &previous.home, 0))
        .interact()?;

    let away_default = match team_index(directory, &previous.away, 0) {
        index if index == home_index => usize::from(home_index == 0),
        index => index,
    };
    let away_index = loop {
        let index = Select::with_theme(theme)
            .with_prompt("Away team")
            .items(&names)
            .default(away_default)
            .interact()?;
        if index != home_index {
            break index;
        }
        output::warning("the away team must differ from the home team");
    };
    let home = names[home_index].to_string();
    let away = names[away_index].to_string();

    output::section("Odds");
    let home_odds = prompt_odds(theme, &format!("{home} decimal odds"), previous.home_odds)?;
    let away_odds = prompt_odds(theme, &format!("{away} decimal odds"), previous.away_odds)?;

    output::section("Model");
    let modes = [
        "Team net ratings",
        "Enter a home win probability",
        "Market only (no edge)",
    ];
    let mode_index = Select::with_theme(theme)
        .with_prompt("Independent model")
        .items(&modes)
        .default(match previous.model {
            ModelMode::Ratings => 0,
            ModelMode::Supplied => 1,
            ModelMode::Market => 2,
        })
        .interact()?;
    let model = match mode_index {
        0 => ModelMode::Ratings,
        1 => ModelMode::Supplied,
        _ => ModelMode::Market,
    };
    let model_home_probability = if model == ModelMode::Supplied {
        Some(
            Input::<f64>::with_theme(theme)
                .with_prompt(format!("{home} win probability"))
                .default(previous.model_home_probability.unwrap_or(0.5))
                .validate_with(|p: &f64| -> std::result::Result<(), &str> {
                    if p.is_finite() && *p > 0.0 && *p < 1.0 {
                        Ok(())
                    } else {
                        Err("probability must be strictly between 0 and 1")
                    }
                })
                .interact_text()?,
        )
    } else {
        previous.model_home_probability
    };

    output::section("Stake");
    let sides = [
        "No stake".to_string(),
        format!("Home: {home}"),
        format!("Away: {away}"),
    ];
    let side_index = Select::with_theme(theme)
        .with_prompt("Size a Kelly stake for")
        .items(&sides)
        .default(match previous.bet_side {
            None => 0,
            Some(Side::Home) => 1,
            Some(Side::Away) => 2,
        })
        .interact()?;
    let bet_side = match side_index {
        1 => Some(Side::Home),
        2 => Some(Side::Away),
        _ => None,
    };

    let (bankroll, kelly_fraction) = if bet_side.is_some() {
        let bankroll = Input::<f64>::with_theme(theme)
            .with_prompt("Bankroll")
            .default(previous.bankroll)
            .validate_with(|b: &f64| -> std::result::Result<(), &str> {
                if b.is_finite() && *b >= 0.0 {
                    Ok(())
                } else {
                    Err("bankroll must be 0 or greater")
                }
            })
            .interact_text()?;
        let kelly_fraction = Input::<f64>::with_theme(theme)
            .with_prompt("Kelly fraction (1.0 = full Kelly)")
            .default(previous.kelly_fraction)
            .validate_with(|k: &f64| -> std::result::Result<(), &str> {
                if k.is_finite() && *k > 0.0 && *k <= 1.0 {
                    Ok(())
                } else {
                    Err("Kelly fraction must be greater than 0 and at most 1")
                }
            })
            .interact_text()?;
        (bankroll, kelly_fraction)
    } else {
        (previous.bankroll, previous.kelly_fraction)
    };

    Ok(Session {
        home,
        away,
        home_odds,
        away_odds,
        model,
        model_home_probability,
        bet_side,
        bankroll,
        kelly_fraction,
    })
}

fn prompt_odds(theme: &ColorfulTheme, prompt: &str, default: f64) -> Result<f64> {
    Ok(Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .validate_with(|o: &f64| -> std::result::Result<(), &str> {
            if o.is_finite() && *o > 1.0 {
                Ok(())
            } else {
                Err("decimal odds must be greater than 1.0")
            }
        })
        .interact_text()?)
}
