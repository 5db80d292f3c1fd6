use agify_client::{ApiError, ApiResponse, ApiResult, StatusCode};

use crate::error::StateError;
use crate::state::{Phase, ScenarioState};

const STATUS_MARKER: &str = "status code ";

/// Pulls `NNN` out of a message containing `status code NNN`.
///
/// Only a fallback for errors that carry no structured status.
pub fn status_from_message(message: &str) -> Option<u16> {
    let start = message.find(STATUS_MARKER)? + STATUS_MARKER.len();
    let digits: String = message[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.len() == 3 {
        digits.parse().ok()
    } else {
        None
    }
}

/// Status of a failed call: structured when available, else read from the message
pub fn error_status(error: &ApiError) -> Option<u16> {
    error
        .status()
        .map(|status| status.as_u16())
        .or_else(|| status_from_message(&error.to_string()))
}

/// The HTTP status the last call in the scenario ended with.
///
/// `Ok(None)` means the call failed below HTTP (e.g. a timeout).
pub fn observed_status(state: &ScenarioState) -> Result<Option<u16>, StateError> {
    match state.phase() {
        Phase::Errored => Ok(error_status(state.error()?)),
        _ => Ok(Some(state.response()?.status.as_u16())),
    }
}

/// True when the last call failed or answered with anything but 200
pub fn is_error_outcome(state: &ScenarioState) -> bool {
    match state.phase() {
        Phase::Errored => true,
        Phase::Responded => state
            .response()
            .map(|response| response.status != StatusCode::OK)
            .unwrap_or(true),
        Phase::Empty => false,
    }
}

/// Rate limiting is non-deterministic: either nothing was throttled, or
/// everything was.
pub fn rate_limit_outcome_acceptable(outcomes: &[ApiResult<ApiResponse>]) -> bool {
    let all_ok = outcomes
        .iter()
        .all(|outcome| matches!(outcome, Ok(response) if response.is_ok()));
    let all_throttled = outcomes.iter().all(|outcome| match outcome {
        Err(error) => error_status(error) == Some(StatusCode::TOO_MANY_REQUESTS.as_u16()),
        Ok(_) => false,
    });
    all_ok || all_throttled
}
