use crate::glossary::{Entry, ENTRIES};
use crate::routes::{render, ResponseResult};
use askama::Template;
use rocket::get;
use rocket::response::content::RawHtml;

#[get("/glossary")]
pub fn glossary() -> ResponseResult<RawHtml<String>> {
    render(GlossaryPage { entries: &ENTRIES })
}

#[derive(Template)]
#[template(path = "glossary.html")]
struct GlossaryPage {
    entries: &'static [Entry],
}

#[cfg(test)]
mod tests {
    use crate::routes::tests::client;
    use rocket::http::Status;

    #[test]
    fn lists_every_stat() {
        let client = client();
        let response = client.get("/glossary").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().unwrap();
        assert_eq!(body.matches("Read more on FanGraphs").count(), 8);
        assert!(body.contains("id=\"wrc\""));
        assert!(body.contains("Hits divided by at-bats"));
    }
}
