//! League context for the park-adjusted run value stats.

use crate::parks::ParkFactors;
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const LEAGUE_WOBA: f64 = 0.310;
pub const WOBA_SCALE: f64 = 1.242;
pub const LEAGUE_RUNS_PER_PA: f64 = 0.11698;
pub const LEAGUE_WRC_PER_PA: f64 = 0.117;

/// Weighted runs created plus, where 100 is league average.
///
/// A park factor above 100 marks a hitter's park, so the same wOBA is worth less there. Neither
/// input is range checked; out of range values give an out of range (but finite) result.
pub fn wrc_plus(player_woba: f64, park_factor: u16) -> f64 {
    let runs_above_average = (player_woba - LEAGUE_WOBA) / WOBA_SCALE;
    let park_adjustment =
        LEAGUE_RUNS_PER_PA - (f64::from(park_factor) / 100.0) * LEAGUE_RUNS_PER_PA;
    (runs_above_average + LEAGUE_RUNS_PER_PA + park_adjustment) / LEAGUE_WRC_PER_PA * 100.0
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum InputError {
    #[display(fmt = "wOBA must be a number between 0 and 1")]
    WobaNotANumber,
    #[display(fmt = "wOBA must be between 0 and 1 (got {})", _0)]
    WobaOutOfRange(f64),
    #[display(fmt = "unknown ballpark: {}", _0)]
    UnknownBallpark(String),
}

impl std::error::Error for InputError {}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WrcPlus {
    pub ballpark: String,
    pub park_factor: u16,
    pub woba: f64,
    pub wrc_plus: f64,
}

impl WrcPlus {
    /// Checks user input against the park factor table and computes wRC+ for it.
    pub fn calculate(
        parks: &ParkFactors,
        player_woba: f64,
        ballpark: &str,
    ) -> Result<WrcPlus, InputError> {
        if !(0.0..=1.0).contains(&player_woba) {
            return Err(InputError::WobaOutOfRange(player_woba));
        }
        let park_factor = parks
            .get(ballpark)
            .ok_or_else(|| InputError::UnknownBallpark(ballpark.into()))?;
        Ok(WrcPlus {
            ballpark: ballpark.into(),
            park_factor,
            woba: player_woba,
            wrc_plus: wrc_plus(player_woba, park_factor),
        })
    }

    /// Like `calculate`, for a wOBA field that may have been missing or unparseable.
    pub fn from_input(
        parks: &ParkFactors,
        player_woba: Option<f64>,
        ballpark: &str,
    ) -> Result<WrcPlus, InputError> {
        let player_woba = player_woba.ok_or(InputError::WobaNotANumber)?;
        WrcPlus::calculate(parks, player_woba, ballpark)
    }
}
