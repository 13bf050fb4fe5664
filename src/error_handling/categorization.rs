//! Error categorization.
//!
//! Maps `reqwest` transport failures onto [`RequesterError`] so the chain walker
//! never has to look at `reqwest` types.

use std::error::Error as StdError;

use super::types::RequesterError;

/// Categorizes a `reqwest::Error` into a [`RequesterError`].
///
/// Timeouts are checked first because a timed-out connect reports both
/// `is_timeout()` and `is_connect()`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `RequesterError`, carrying the error message and its
/// immediate source for context.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RequesterError {
    let message = describe_reqwest_error(error);

    if error.is_timeout() {
        RequesterError::Timeout(message)
    } else if error.is_connect() {
        RequesterError::Connect(message)
    } else {
        RequesterError::Request(message)
    }
}

/// Renders a `reqwest::Error` with its underlying source, which usually names
/// the real cause (DNS failure, refused connection, TLS error).
fn describe_reqwest_error(error: &reqwest::Error) -> String {
    match error.source() {
        Some(source) => format!("{}: {}", error, source),
        None => error.to_string(),
    }
}

impl From<reqwest::Error> for RequesterError {
    fn from(error: reqwest::Error) -> Self {
        categorize_reqwest_error(&error)
    }
}
