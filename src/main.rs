mod batting;
mod csv;
mod glossary;
mod league;
mod parks;
mod percentage;
mod routes;
mod stats;
mod table;

use rocket::fairing::AdHoc;
use rocket::{catchers, launch, routes};

trait ResultExt<T, E> {
    fn log_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(err) => {
                log::error!("{:#}", err);
                None
            }
        }
    }
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();

    rocket::build()
        .mount(
            "/",
            routes![
                routes::css,
                routes::batting::form,
                routes::batting::calculate,
                routes::wrc_plus::form,
                routes::wrc_plus::calculate,
                routes::glossary::glossary,
                routes::parks::parks,
                routes::parks::parks_csv,
                routes::parks::parks_json,
                routes::api::stats,
                routes::api::wrc_plus,
            ],
        )
        .register("/", catchers![routes::unprocessable])
        .register("/api", catchers![routes::api::unprocessable])
        .attach(AdHoc::try_on_ignite("Park factors", parks::attach))
}
