pub struct Entry {
    pub name: &'static str,
    pub abbr: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

impl Entry {
    /// Fragment id for linking to this entry on the glossary page.
    pub fn anchor(&self) -> String {
        self.abbr
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

pub const ENTRIES: [Entry; 8] = [
    Entry {
        name: "Walk%",
        abbr: "BB%",
        description: "Percentage of plate appearances resulting in walks",
        url: "https://library.fangraphs.com/offense/rate-stats/",
    },
    Entry {
        name: "Strikeout%",
        abbr: "K%",
        description: "Percentage of plate appearances resulting in strikeouts",
        url: "https://library.fangraphs.com/offense/rate-stats/",
    },
    Entry {
        name: "Batting Average",
        abbr: "AVG",
        description: "Hits divided by at-bats",
        url: "https://library.fangraphs.com/offense/offensive-statistics-list/",
    },
    Entry {
        name: "On-base Percentage",
        abbr: "OBP",
        description: "How often a batter reaches base",
        url: "https://library.fangraphs.com/offense/offensive-statistics-list/",
    },
    Entry {
        name: "Slugging Percentage",
        abbr: "SLG",
        description: "Total bases divided by at-bats",
        url: "https://library.fangraphs.com/offense/offensive-statistics-list/",
    },
    Entry {
        name: "On-base Plus Slugging",
        abbr: "OPS",
        description: "OBP plus SLG",
        url: "https://www.fangraphs.com/library/offense/ops/",
    },
    Entry {
        name: "Weighted On-base Average",
        abbr: "wOBA",
        description: "Advanced offensive metric that properly weights outcomes",
        url: "https://library.fangraphs.com/offense/woba/",
    },
    Entry {
        name: "Weighted Runs Created Plus",
        abbr: "wRC+",
        description: "Takes wOBA and adjusts it based on league and park factors, where 100 is average",
        url: "https://library.fangraphs.com/offense/wrc/",
    },
];
