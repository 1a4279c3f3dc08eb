use rocket::FromForm;
use serde::{Deserialize, Serialize};

// Linear weights per event, scaled so that wOBA reads like OBP.
const W_UBB: f64 = 0.69;
const W_HBP: f64 = 0.72;
const W_1B: f64 = 0.88;
const W_2B: f64 = 1.25;
const W_3B: f64 = 1.59;
const W_HR: f64 = 2.05;

/// Counting stats for a single batter, as entered on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, FromForm)]
pub struct BattingLine {
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub unintentional_walks: u32,
    pub intentional_walks: u32,
    pub hit_by_pitch: u32,
    pub sacrifice_flies: u32,
    pub strikeouts: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
}

/// Rate stats derived from a [`BattingLine`], at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StatLine {
    pub walk_rate: f64,
    pub strikeout_rate: f64,
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub on_base_plus_slugging: f64,
    pub woba: f64,
}

impl BattingLine {
    /// A full season from a decent regular, used to prefill the form.
    pub fn sample() -> BattingLine {
        BattingLine {
            plate_appearances: 600,
            at_bats: 550,
            unintentional_walks: 50,
            intentional_walks: 5,
            hit_by_pitch: 10,
            sacrifice_flies: 5,
            strikeouts: 150,
            singles: 100,
            doubles: 30,
            triples: 5,
            home_runs: 25,
        }
    }

    /// Form labels, input names and current values, in display order.
    pub fn fields(&self) -> [(&'static str, &'static str, u32); 11] {
        [
            ("Plate Appearances (PA)", "plate_appearances", self.plate_appearances),
            ("At-Bats (AB)", "at_bats", self.at_bats),
            ("Unintentional Walks (UBB)", "unintentional_walks", self.unintentional_walks),
            ("Intentional Walks (IBB)", "intentional_walks", self.intentional_walks),
            ("Hit By Pitch (HBP)", "hit_by_pitch", self.hit_by_pitch),
            ("Sacrifice Flies (SF)", "sacrifice_flies", self.sacrifice_flies),
            ("Strikeouts (K)", "strikeouts", self.strikeouts),
            ("Singles (1B)", "singles", self.singles),
            ("Doubles (2B)", "doubles", self.doubles),
            ("Triples (3B)", "triples", self.triples),
            ("Home Runs (HR)", "home_runs", self.home_runs),
        ]
    }

    pub fn walks(&self) -> u64 {
        u64::from(self.unintentional_walks) + u64::from(self.intentional_walks)
    }

    pub fn hits(&self) -> u64 {
        u64::from(self.singles)
            + u64::from(self.doubles)
            + u64::from(self.triples)
            + u64::from(self.home_runs)
    }

    pub fn total_bases(&self) -> u64 {
        u64::from(self.singles)
            + 2 * u64::from(self.doubles)
            + 3 * u64::from(self.triples)
            + 4 * u64::from(self.home_runs)
    }

    pub fn walk_rate(&self) -> f64 {
        ratio(self.walks(), self.plate_appearances.into()) * 100.0
    }

    pub fn strikeout_rate(&self) -> f64 {
        ratio(self.strikeouts.into(), self.plate_appearances.into()) * 100.0
    }

    pub fn batting_average(&self) -> f64 {
        ratio(self.hits(), self.at_bats.into())
    }

    pub fn on_base_percentage(&self) -> f64 {
        ratio(
            self.hits() + self.walks() + u64::from(self.hit_by_pitch),
            u64::from(self.at_bats)
                + self.walks()
                + u64::from(self.hit_by_pitch)
                + u64::from(self.sacrifice_flies),
        )
    }

    pub fn slugging_percentage(&self) -> f64 {
        ratio(self.total_bases(), self.at_bats.into())
    }

    pub fn on_base_plus_slugging(&self) -> f64 {
        self.on_base_percentage() + self.slugging_percentage()
    }

    /// Weighted on-base average.
    ///
    /// Intentional walks carry no weight and are left out of the denominator. The division is not
    /// guarded: a line with no at-bats, unintentional walks, sacrifice flies or hit-by-pitches
    /// yields NaN (or infinity if it somehow has hits) rather than zero.
    pub fn woba(&self) -> f64 {
        let numer = W_UBB * f64::from(self.unintentional_walks)
            + W_HBP * f64::from(self.hit_by_pitch)
            + W_1B * f64::from(self.singles)
            + W_2B * f64::from(self.doubles)
            + W_3B * f64::from(self.triples)
            + W_HR * f64::from(self.home_runs);
        let denom = u64::from(self.at_bats)
            + u64::from(self.unintentional_walks)
            + u64::from(self.sacrifice_flies)
            + u64::from(self.hit_by_pitch);
        numer / denom as f64
    }

    pub fn stat_line(&self) -> StatLine {
        StatLine {
            walk_rate: self.walk_rate(),
            strikeout_rate: self.strikeout_rate(),
            batting_average: self.batting_average(),
            on_base_percentage: self.on_base_percentage(),
            slugging_percentage: self.slugging_percentage(),
            on_base_plus_slugging: self.on_base_plus_slugging(),
            woba: self.woba(),
        }
    }
}

/// `numer / denom`, or zero when there is nothing to divide by.
fn ratio(numer: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}
