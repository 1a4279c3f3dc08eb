use crate::league::WrcPlus;
use crate::parks::ParkFactors;
use crate::percentage::Pct;
use crate::routes::{render, ResponseResult};
use askama::Template;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::{get, post, FromForm, State};

const DEFAULT_WOBA: f64 = 0.350;

#[derive(Debug, FromForm)]
pub struct WrcPlusForm {
    woba: Option<f64>,
    park: Option<String>,
}

#[get("/wrc-plus")]
pub fn form(parks: &State<ParkFactors>) -> ResponseResult<RawHtml<String>> {
    render(WrcPlusPage::new(parks, DEFAULT_WOBA, None))
}

#[post("/wrc-plus", data = "<form>")]
pub fn calculate(
    form: Form<WrcPlusForm>,
    parks: &State<ParkFactors>,
) -> ResponseResult<RawHtml<String>> {
    let park = form.park.as_deref().unwrap_or_default();
    let page = match WrcPlus::from_input(parks, form.woba, park) {
        Ok(result) => WrcPlusPage {
            result: Some(WrcPlusResult {
                display: Pct(result.wrc_plus),
                park_factor: result.park_factor,
            }),
            ..WrcPlusPage::new(parks, result.woba, Some(&result.ballpark))
        },
        Err(err) => WrcPlusPage {
            error: Some(err.to_string()),
            ..WrcPlusPage::new(parks, form.woba.unwrap_or(DEFAULT_WOBA), Some(park))
        },
    };
    render(page)
}

#[derive(Template)]
#[template(path = "wrc_plus.html")]
struct WrcPlusPage {
    woba: String,
    parks: Vec<ParkOption>,
    result: Option<WrcPlusResult>,
    error: Option<String>,
}

impl WrcPlusPage {
    fn new(parks: &ParkFactors, woba: f64, selected: Option<&str>) -> WrcPlusPage {
        let selected = selected.unwrap_or_default();
        WrcPlusPage {
            woba: format!("{:.3}", woba),
            parks: parks
                .iter()
                .map(|(name, park_factor)| ParkOption {
                    name: name.into(),
                    park_factor,
                    selected: if name == selected { "selected" } else { "" },
                })
                .collect(),
            result: None,
            error: None,
        }
    }
}

struct WrcPlusResult {
    display: Pct<0>,
    park_factor: u16,
}

struct ParkOption {
    name: String,
    park_factor: u16,
    selected: &'static str,
}
