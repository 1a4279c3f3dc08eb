use csv::Writer;
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::Request;
use serde::Serialize;

pub struct Csv<T>(pub T);

impl<'r, T: Serialize> Responder<'r, 'static> for Csv<Vec<T>> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let string = write_csv(self.0).map_err(|e| {
            log::error!("CSV failed to serialize: {:?}", e);
            Status::InternalServerError
        })?;
        (ContentType::CSV, string).respond_to(req)
    }
}

fn write_csv<T: Serialize>(rows: Vec<T>) -> anyhow::Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}
