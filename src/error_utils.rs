//! Error classification and reporting.
//!
//! [`classify_error`] turns any client failure into one line of text for the
//! terminal. It never fails: HTTP failures get the server's `errors` detail
//! when the body carries one, everything else reports its own message.

use crate::pagertree::ApiError;
use color_print::cformat;
use serde_json::Value;
use tracing::{error, warn};

pub const UNPARSEABLE_DETAILS: &str = "unable to parse error details";

fn error_details(body: &str) -> String {
    let errors = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("errors").cloned());

    match errors {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(message)) => message,
        Some(Value::Null) | Some(Value::Array(_)) | None => UNPARSEABLE_DETAILS.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Build the diagnostic for a failed action, e.g. `"creating alert"`.
pub fn classify_error(error: &ApiError, action: &str) -> String {
    match error {
        ApiError::RequestFailed {
            status,
            reason,
            body,
        } => format!(
            "Error {action}: {status} - {reason}: {}",
            error_details(body)
        ),
        other => format!("Error {action}: {other}"),
    }
}

/// Report an error consistently with both logging and user-facing output.
pub fn report_error<E: std::fmt::Display>(error: &E) {
    error!("{}", error);
    eprintln!("{}", cformat!("<r>{}</r>", error));
}

/// Report a warning consistently with both logging and user-facing output.
pub fn report_warning<E: std::fmt::Display>(warning: &E) {
    warn!("{}", warning);
    eprintln!("{}", cformat!("<y>Warning:</y> {}", warning));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(status: u16, reason: &str, body: &str) -> ApiError {
        ApiError::RequestFailed {
            status,
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_errors_array_is_joined() {
        let error = failed(422, "Unprocessable Entity", r#"{"errors": ["title is required", "urgency is invalid"]}"#);
        assert_eq!(
            classify_error(&error, "creating alert"),
            "Error creating alert: 422 - Unprocessable Entity: title is required, urgency is invalid"
        );
    }

    #[test]
    fn test_errors_string_is_used_verbatim() {
        let error = failed(404, "Not Found", r#"{"errors": "record not found"}"#);
        assert!(classify_error(&error, "showing team").ends_with(": record not found"));
    }

    #[test]
    fn test_errors_object_is_rendered_as_json() {
        let error = failed(422, "Unprocessable Entity", r#"{"errors": {"title": ["blank"]}}"#);
        assert!(classify_error(&error, "creating alert").ends_with(r#": {"title":["blank"]}"#));
    }

    #[test]
    fn test_unparseable_body() {
        let error = failed(502, "Bad Gateway", "<html>oops</html>");
        assert_eq!(
            classify_error(&error, "listing alerts"),
            "Error listing alerts: 502 - Bad Gateway: unable to parse error details"
        );
        let no_errors = failed(500, "Internal Server Error", r#"{"message": "boom"}"#);
        assert!(classify_error(&no_errors, "listing alerts").ends_with(UNPARSEABLE_DETAILS));
    }

    #[test]
    fn test_non_http_errors_report_their_message() {
        let error = ApiError::NotFound("no alert found with alias \"X\"".to_string());
        assert_eq!(
            classify_error(&error, "acknowledging alert"),
            "Error acknowledging alert: no alert found with alias \"X\""
        );
    }
}
