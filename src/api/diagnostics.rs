//! Human-readable messages for failed calls
//!
//! These strings are what the user sees in the notification channel, so they
//! name the status, the method and the path (never the query string) plus a
//! short detail taken from the response body when one is usable.

use reqwest::{Method, StatusCode};
use tracing::warn;

/// Details longer than this are replaced by a fixed note
const DETAIL_CHAR_LIMIT: usize = 200;

/// Drop the query string from a URL for display
#[must_use]
pub fn display_path(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

/// Message for a call that got a non-success status
///
/// `body` is `None` when the body could not be read at all.
#[must_use]
pub fn status_message(
    status: StatusCode,
    method: &Method,
    url: &str,
    content_type: Option<&str>,
    body: Option<&str>,
) -> String {
    let path = display_path(url);
    let mut message = match status.canonical_reason() {
        Some(reason) => format!("API Error: {} {reason} on {method} {path}", status.as_u16()),
        None => format!("API Error: {} on {method} {path}", status.as_u16()),
    };

    match body {
        None => message.push_str(" - (Could not read error response body)"),
        Some("") => {}
        Some(text) => {
            let detail = body_detail(content_type, text);
            let length = detail.chars().count();
            if !detail.trim().starts_with('<') && length < DETAIL_CHAR_LIMIT {
                message.push_str(&format!(" - {detail}"));
            } else if length >= DETAIL_CHAR_LIMIT {
                message.push_str(" - (Response body too large or is HTML)");
            }
        }
    }

    message
}

/// Message for a call that never got a response
#[must_use]
pub fn network_message(error: &str, method: &Method, url: &str) -> String {
    format!("Network Error: {error} on {method} {}", display_path(url))
}

/// Pick the most useful part of an error body
///
/// JSON bodies yield their `message` or `error` field, falling back to the
/// whole document; anything else is used as-is.
#[must_use]
pub fn body_detail(content_type: Option<&str>, body: &str) -> String {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return body.to_string();
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(non_empty_text))
            .unwrap_or_else(|| value.to_string()),
        Err(e) => {
            warn!(error = %e, "error response claimed JSON but did not parse");
            body.to_string()
        }
    }
}

fn non_empty_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::String(_) | serde_json::Value::Null | serde_json::Value::Bool(false) => {
            None
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_json_message_field_is_used() {
        let message = status_message(
            StatusCode::BAD_REQUEST,
            &Method::GET,
            "https://api.test/dogs/search?breeds=Pug",
            JSON,
            Some(r#"{"message":"bad request"}"#),
        );
        assert_eq!(
            message,
            "API Error: 400 Bad Request on GET https://api.test/dogs/search - bad request"
        );
    }

    #[rstest]
    #[case::message(r#"{"message":"m","error":"e"}"#, "m")]
    #[case::error(r#"{"error":"e"}"#, "e")]
    #[case::whole(r#"{"code":7}"#, r#"{"code":7}"#)]
    #[case::empty_message(r#"{"message":"","error":"e"}"#, "e")]
    fn test_body_detail_json(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(body_detail(JSON, body), expected);
    }

    #[test]
    fn test_body_detail_broken_json_falls_back_to_text() {
        assert_eq!(body_detail(JSON, "{not json"), "{not json");
    }

    #[test]
    fn test_plain_text_detail() {
        let message = status_message(
            StatusCode::UNAUTHORIZED,
            &Method::POST,
            "https://api.test/dogs",
            Some("text/plain"),
            Some("Unauthorized"),
        );
        assert!(message.ends_with("on POST https://api.test/dogs - Unauthorized"));
    }

    #[test]
    fn test_html_body_is_not_echoed() {
        let message = status_message(
            StatusCode::BAD_GATEWAY,
            &Method::GET,
            "https://api.test/dogs/breeds",
            Some("text/html"),
            Some("<html>bad gateway</html>"),
        );
        assert_eq!(message, "API Error: 502 Bad Gateway on GET https://api.test/dogs/breeds");
    }

    #[test]
    fn test_long_body_is_summarised() {
        let body = "x".repeat(250);
        let message = status_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            &Method::GET,
            "https://api.test/dogs/breeds",
            Some("text/plain"),
            Some(&body),
        );
        assert!(message.ends_with(" - (Response body too large or is HTML)"));
        assert!(!message.contains("xxxx"));
    }

    #[test]
    fn test_unreadable_body() {
        let message = status_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            &Method::POST,
            "https://api.test/dogs/match",
            None,
            None,
        );
        assert!(message.ends_with(" - (Could not read error response body)"));
    }

    #[test]
    fn test_empty_body_adds_nothing() {
        let message = status_message(
            StatusCode::NOT_FOUND,
            &Method::GET,
            "https://api.test/nope",
            None,
            Some(""),
        );
        assert_eq!(message, "API Error: 404 Not Found on GET https://api.test/nope");
    }

    #[test]
    fn test_network_message_strips_query() {
        let message = network_message(
            "connection refused",
            &Method::GET,
            "https://api.test/dogs/search?size=25",
        );
        assert_eq!(
            message,
            "Network Error: connection refused on GET https://api.test/dogs/search"
        );
    }
}
