use crate::league::WrcPlus;
use crate::parks::ParkFactors;
use crate::stats::{BattingLine, StatLine};
use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::{catch, get, post, State};

#[post("/api/stats", data = "<line>")]
pub fn stats(line: Json<BattingLine>) -> Json<StatLine> {
    Json(line.stat_line())
}

#[get("/api/wrc-plus?<woba>&<park>")]
pub fn wrc_plus(
    woba: Option<f64>,
    park: Option<String>,
    parks: &State<ParkFactors>,
) -> Result<Json<WrcPlus>, BadRequest<String>> {
    WrcPlus::from_input(parks, woba, park.as_deref().unwrap_or_default())
        .map(Json)
        .map_err(|err| BadRequest(err.to_string()))
}

#[catch(422)]
pub fn unprocessable() -> &'static str {
    "request body is not a valid batting line"
}

#[cfg(test)]
mod tests {
    use crate::league::WrcPlus;
    use crate::routes::tests::client;
    use crate::stats::{BattingLine, StatLine};
    use float_cmp::assert_approx_eq;
    use rocket::http::{ContentType, Status};

    #[test]
    fn stats() {
        let client = client();
        let response = client
            .post("/api/stats")
            .header(ContentType::JSON)
            .body(serde_json::to_string(&BattingLine::sample()).unwrap())
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let stats: StatLine = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        let expected = BattingLine::sample().stat_line();
        assert_approx_eq!(f64, stats.on_base_percentage, expected.on_base_percentage);
        assert_approx_eq!(f64, stats.on_base_plus_slugging, expected.on_base_plus_slugging);
        assert_approx_eq!(f64, stats.woba, expected.woba);
    }

    #[test]
    fn undefined_woba_is_null() {
        let client = client();
        let mut line = serde_json::to_value(BattingLine::sample()).unwrap();
        for (_, value) in line.as_object_mut().unwrap() {
            *value = 0.into();
        }
        let response = client
            .post("/api/stats")
            .header(ContentType::JSON)
            .body(line.to_string())
            .dispatch();
        let stats: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(stats["batting_average"], 0.0);
        assert!(stats["woba"].is_null());
    }

    #[test]
    fn rejects_negative_counts() {
        let client = client();
        let response = client
            .post("/api/stats")
            .header(ContentType::JSON)
            .body(r#"{"plate_appearances": -1}"#)
            .dispatch();
        assert_eq!(response.status(), Status::UnprocessableEntity);
        assert_eq!(response.content_type(), Some(ContentType::Plain));
        assert_eq!(
            response.into_string().unwrap(),
            "request body is not a valid batting line"
        );
    }

    #[test]
    fn wrc_plus() {
        let client = client();
        let response = client
            .get("/api/wrc-plus?woba=0.350&park=Citi%20Field%20(New%20York%20Mets)")
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let result: WrcPlus = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(result.ballpark, "Citi Field (New York Mets)");
        assert_eq!(result.park_factor, 96);
        assert_approx_eq!(f64, result.wrc_plus, crate::league::wrc_plus(0.350, 96));
    }

    #[test]
    fn wrc_plus_bad_input() {
        let client = client();
        let response = client
            .get("/api/wrc-plus?woba=0.350&park=Polo%20Grounds")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_string().unwrap(),
            "unknown ballpark: Polo Grounds"
        );

        let response = client
            .get("/api/wrc-plus?woba=-0.1&park=Citi%20Field%20(New%20York%20Mets)")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn wrc_plus_unparseable_woba() {
        let client = client();
        let response = client
            .get("/api/wrc-plus?woba=abc&park=Citi%20Field%20(New%20York%20Mets)")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_string().unwrap(),
            "wOBA must be a number between 0 and 1"
        );

        let response = client.get("/api/wrc-plus").dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }
}
