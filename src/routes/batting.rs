use crate::batting;
use crate::routes::{render, ResponseResult};
use crate::stats::BattingLine;
use crate::table::Table;
use askama::Template;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::{get, post};

#[get("/")]
pub fn form() -> ResponseResult<RawHtml<String>> {
    render(BattingPage {
        fields: BattingLine::sample().fields(),
        results: None,
    })
}

#[post("/", data = "<line>")]
pub fn calculate(line: Form<BattingLine>) -> ResponseResult<RawHtml<String>> {
    let line = line.into_inner();
    let stats = line.stat_line();
    if !stats.woba.is_finite() {
        log::warn!("wOBA is undefined for {:?}", line);
    }
    render(BattingPage {
        fields: line.fields(),
        results: Some(batting::table(stats)),
    })
}

#[derive(Template)]
#[template(path = "batting.html")]
struct BattingPage {
    fields: [(&'static str, &'static str, u32); 11],
    results: Option<Table<{ batting::COLS }>>,
}
