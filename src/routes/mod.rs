pub mod api;
pub mod batting;
pub mod glossary;
pub mod parks;
pub mod wrc_plus;

use askama::Template;
use rocket::http::ContentType;
use rocket::response::{content::RawHtml, Debug};
use rocket::{catch, get};

type ResponseResult<T> = Result<T, Debug<anyhow::Error>>;

fn render(page: impl Template) -> ResponseResult<RawHtml<String>> {
    Ok(RawHtml(page.render().map_err(anyhow::Error::from)?))
}

#[get("/styles.css")]
pub fn css() -> (ContentType, &'static str) {
    (
        ContentType::CSS,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/styles.css")),
    )
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    message: &'static str,
}

#[catch(422)]
pub fn unprocessable() -> ResponseResult<RawHtml<String>> {
    render(ErrorPage {
        message: "The form had a missing or invalid value. Every count must be a whole number of zero or more.",
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;

    pub(crate) fn client() -> Client {
        Client::tracked(crate::rocket()).expect("valid rocket instance")
    }

    #[test]
    fn stylesheet() {
        let client = client();
        let response = client.get("/styles.css").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::CSS));
    }

    #[test]
    fn missing_page() {
        let client = client();
        assert_eq!(client.get("/nope").dispatch().status(), Status::NotFound);
    }
}
