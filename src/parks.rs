use crate::ResultExt;
use anyhow::{ensure, Context, Result};
use indexmap::IndexMap;
use rocket::{Build, Rocket};
use serde::{Deserialize, Serialize};
use std::env::var;
use std::fs::File;
use std::io::Read;

const BUILTIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/park_factors.csv"));

/// Ballpark name to park factor, where 100 is a league-average run environment. Kept in the order
/// of the source table.
#[derive(Debug, Clone)]
pub struct ParkFactors(IndexMap<String, u16>);

#[derive(Debug, Deserialize, Serialize)]
pub struct ParkRecord {
    pub ballpark: String,
    pub park_factor: u16,
}

impl ParkFactors {
    pub fn from_csv(reader: impl Read) -> Result<ParkFactors> {
        let mut map = IndexMap::new();
        for (line, record) in csv::Reader::from_reader(reader)
            .into_deserialize::<ParkRecord>()
            .enumerate()
        {
            let record = record.with_context(|| format!("bad park factor record {}", line + 1))?;
            let ballpark = record.ballpark.trim().to_owned();
            ensure!(!ballpark.is_empty(), "park factor record {} has no ballpark", line + 1);
            ensure!(
                record.park_factor > 0,
                "park factor for {} must be positive",
                ballpark
            );
            ensure!(
                map.insert(ballpark.clone(), record.park_factor).is_none(),
                "duplicate ballpark {}",
                ballpark
            );
        }
        ensure!(!map.is_empty(), "park factor table is empty");
        Ok(ParkFactors(map))
    }

    pub fn builtin() -> Result<ParkFactors> {
        ParkFactors::from_csv(BUILTIN.as_bytes()).context("built-in park factor table is invalid")
    }

    /// Reads the table named by `PARK_FACTORS`, falling back to the built-in table.
    pub fn load() -> Result<ParkFactors> {
        ParkFactors::load_from(var("PARK_FACTORS").ok().as_deref())
    }

    pub fn load_from(path: Option<&str>) -> Result<ParkFactors> {
        match path {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open park factor table {}", path))?;
                let parks = ParkFactors::from_csv(file)
                    .with_context(|| format!("failed to read park factor table {}", path))?;
                log::info!("loaded {} park factors from {}", parks.len(), path);
                Ok(parks)
            }
            None => ParkFactors::builtin(),
        }
    }

    pub fn get(&self, ballpark: &str) -> Option<u16> {
        self.0.get(ballpark).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.0.iter().map(|(name, factor)| (name.as_str(), *factor))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn records(&self) -> Vec<ParkRecord> {
        self.iter()
            .map(|(ballpark, park_factor)| ParkRecord {
                ballpark: ballpark.into(),
                park_factor,
            })
            .collect()
    }

    pub fn as_map(&self) -> &IndexMap<String, u16> {
        &self.0
    }
}

pub(crate) async fn attach(rocket: Rocket<Build>) -> rocket::fairing::Result {
    manage(rocket, ParkFactors::load())
}

fn manage(rocket: Rocket<Build>, parks: Result<ParkFactors>) -> rocket::fairing::Result {
    match parks.log_err() {
        Some(parks) => Ok(rocket.manage(parks)),
        None => Err(rocket),
    }
}
