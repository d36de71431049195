//! HTTP server components for rhymer.

use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{Build, Rocket, State};
use rocket_dyn_templates::Template;

use crate::rhyme::errors::{RhymeError, Result};
use crate::rhyme::finder::RhymeFinder;

/// A Context for populating the index template.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct IndexTemplateContext {
    pattern_count: usize,
    total_words: usize,
}

/// The result of one rhyme lookup, used for both the HTML and JSON responses.
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
struct RhymesResponse {
    query: String,
    rhymes: Vec<String>,
}

/// Handler for the root (/) page.
#[get("/")]
fn index(finder: &State<RhymeFinder>) -> Template {
    let context = IndexTemplateContext {
        pattern_count: finder.pattern_count(),
        total_words: finder.total_words(),
    };
    return Template::render("index", context);
}

/// Handler for looking up the rhymes of a single word.
#[get("/rhymes?<word>")]
fn rhymes(finder: &State<RhymeFinder>, word: &str) -> Template {
    let context = RhymesResponse {
        query: String::from(word),
        rhymes: finder.find_rhymes(word),
    };
    return Template::render("rhymes", context);
}

/// The JSON flavor of `rhymes`.
#[get("/api/rhymes?<word>")]
fn api_rhymes(finder: &State<RhymeFinder>, word: &str) -> Json<RhymesResponse> {
    Json(RhymesResponse {
        query: String::from(word),
        rhymes: finder.find_rhymes(word),
    })
}

/// Builds the server around an already-loaded finder, shared read-only by every request.
pub fn build(finder: RhymeFinder) -> Rocket<Build> {
    rocket::build()
        .manage(finder)
        .attach(Template::fairing())
        .mount("/", routes![index, rhymes, api_rhymes])
}

/// Starts the Rocket HTTP server and awaits until the server shuts down.
///
/// Args:
///
/// * `finder` - An already-initialized finder to use when handling all requests.
pub async fn run(finder: RhymeFinder) -> Result<()> {
    tracing::info!("launching web server, type Control-C in the terminal to stop it");

    let result = build(finder).launch().await;
    if let Err(e) = result {
        return Err(RhymeError::Server(e.to_string()));
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhyme::finder::TieBreak;
    use crate::rhyme::rhyme_map::read_map;
    use rocket::http::Status;
    use rocket::local::blocking::Client;
    use std::io::Cursor;

    fn client() -> Client {
        let index = read_map(Cursor::new("AE1 T: CAT HAT\nAO1 G: DOG\n")).unwrap();
        let finder = RhymeFinder::new(index, TieBreak::FirstLoaded);
        Client::tracked(build(finder)).expect("valid rocket instance")
    }

    #[test]
    fn test_api_rhymes() {
        let client = client();
        let response = client.get("/api/rhymes?word=cat").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().unwrap(),
            r#"{"query":"cat","rhymes":["Hat"]}"#
        );
    }

    #[test]
    fn test_api_rhymes_unknown_word() {
        let client = client();
        let response = client.get("/api/rhymes?word=zebra").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().unwrap(),
            r#"{"query":"zebra","rhymes":[]}"#
        );
    }

    #[test]
    fn test_rhymes_page_lists_results() {
        let client = client();
        let response = client.get("/rhymes?word=hat").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert!(response.into_string().unwrap().contains("Cat"));
    }
}
