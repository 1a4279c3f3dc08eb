use crate::percentage::{Pct, Percent};
use crate::stats::StatLine;
use crate::table::{row, Table, Value};

pub const COLS: usize = 7;

pub fn table(stats: StatLine) -> Table<COLS> {
    let mut table = Table::new(
        [
            ("Walk Percentage", "BB%"),
            ("Strikeout Percentage", "K%"),
            ("Batting Average", "AVG"),
            ("On-base Percentage", "OBP"),
            ("Slugging Percentage", "SLG"),
            ("On-base Plus Slugging", "OPS"),
            ("Weighted On-base Average", "wOBA"),
        ],
        "text-right",
    );
    table.push(build_row(stats));
    table
}

pub fn build_row(stats: StatLine) -> [Value; COLS] {
    row![
        Percent(stats.walk_rate),
        Percent(stats.strikeout_rate),
        Pct::<3>(stats.batting_average),
        Pct::<3>(stats.on_base_percentage),
        Pct::<3>(stats.slugging_percentage),
        Pct::<3>(stats.on_base_plus_slugging),
        Pct::<3>(stats.woba),
    ]
}
