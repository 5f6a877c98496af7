// Service wrappers around the two backend HTTP APIs. Each service holds
// a blocking reqwest client plus its base URL, passed in explicitly so
// tests can point them at whatever server they like.

pub mod image;
pub mod upload;

use reqwest::blocking::Response;
use serde::Deserialize;

/// Error body the backend sends with non-2xx responses
/// (FastAPI-style `{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Turn a non-2xx response into a human-readable message: the server's
/// `detail` field when the body parses, otherwise the given fallback
/// plus the status code.
fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    match response.json::<ErrorBody>() {
        Ok(ErrorBody { detail: Some(detail) }) => detail,
        _ => format!("{} with status {}", fallback, status.as_u16()),
    }
}
