use crate::csv::Csv;
use crate::parks::{ParkFactors, ParkRecord};
use crate::routes::{render, ResponseResult};
use crate::table::{row, Table};
use askama::Template;
use indexmap::IndexMap;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/parks")]
pub fn parks(parks: &State<ParkFactors>) -> ResponseResult<RawHtml<String>> {
    let mut table = Table::new([("Ballpark", "Ballpark"), ("Park Factor", "PF")], "text-left");
    for (name, park_factor) in parks.iter() {
        table.push(row![name, park_factor]);
    }
    render(ParksPage { table })
}

#[get("/parks.csv")]
pub fn parks_csv(parks: &State<ParkFactors>) -> Csv<Vec<ParkRecord>> {
    Csv(parks.records())
}

#[get("/parks.json")]
pub fn parks_json(parks: &State<ParkFactors>) -> Json<IndexMap<String, u16>> {
    Json(parks.as_map().clone())
}

#[derive(Template)]
#[template(path = "parks.html")]
struct ParksPage {
    table: Table<2>,
}
