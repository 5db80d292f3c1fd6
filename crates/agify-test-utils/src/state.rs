//! Per-scenario blackboard shared between "when" and "then" steps.

use agify_client::{ApiError, ApiResponse, ApiResult, Prediction};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::StateError;

/// Well-known test data keys
pub mod keys {
    pub const RESPONSE_TIME: &str = "responseTime";
    pub const REQUESTED_NAME: &str = "requestedName";
    pub const REQUESTED_COUNTRY: &str = "requestedCountry";
    pub const SECOND_RESPONSE: &str = "secondResponse";
    pub const BATCH_NAMES: &str = "batchNames";
    pub const BATCH_RESPONSES: &str = "batchResponses";
    pub const BATCH_RESPONSE_TIME: &str = "batchResponseTime";
    pub const RAPID_OUTCOMES: &str = "rapidOutcomes";
    pub const GROUP_NAMES: &str = "groupNames";
    pub const GROUP_OUTCOMES: &str = "groupOutcomes";
    pub const COUNTRY_RESPONSES: &str = "countryResponses";

    /// Key for a response kept for later comparison against other names
    pub fn response_for(name: &str) -> String {
        format!("response:{}", name)
    }
}

/// A value stashed between steps
#[derive(Debug)]
pub enum TestValue {
    Elapsed(Duration),
    Text(String),
    Names(Vec<String>),
    Response(ApiResponse),
    Responses(Vec<ApiResponse>),
    Outcomes(Vec<ApiResult<ApiResponse>>),
}

impl TestValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Elapsed(_) => "an elapsed time",
            Self::Text(_) => "text",
            Self::Names(_) => "a name list",
            Self::Response(_) => "a response",
            Self::Responses(_) => "a response list",
            Self::Outcomes(_) => "an outcome list",
        }
    }
}

impl From<Duration> for TestValue {
    fn from(value: Duration) -> Self {
        Self::Elapsed(value)
    }
}

impl From<String> for TestValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for TestValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for TestValue {
    fn from(value: Vec<String>) -> Self {
        Self::Names(value)
    }
}

impl From<ApiResponse> for TestValue {
    fn from(value: ApiResponse) -> Self {
        Self::Response(value)
    }
}

impl From<Vec<ApiResponse>> for TestValue {
    fn from(value: Vec<ApiResponse>) -> Self {
        Self::Responses(value)
    }
}

impl From<Vec<ApiResult<ApiResponse>>> for TestValue {
    fn from(value: Vec<ApiResult<ApiResponse>>) -> Self {
        Self::Outcomes(value)
    }
}

/// Where a scenario stands with respect to its last API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Responded,
    Errored,
}

/// State owned by a single scenario.
///
/// The last call's outcome is a single `Result`, so a response and an error
/// can never be held at the same time; recording one replaces the other.
#[derive(Debug, Default)]
pub struct ScenarioState {
    outcome: Option<ApiResult<ApiResponse>>,
    test_data: HashMap<String, TestValue>,
}

impl ScenarioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&mut self, response: ApiResponse) {
        self.outcome = Some(Ok(response));
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.outcome = Some(Err(error));
    }

    /// Stores whichever side of `result` the call produced
    pub fn record(&mut self, result: ApiResult<ApiResponse>) {
        self.outcome = Some(result);
    }

    pub fn phase(&self) -> Phase {
        match &self.outcome {
            None => Phase::Empty,
            Some(Ok(_)) => Phase::Responded,
            Some(Err(_)) => Phase::Errored,
        }
    }

    pub fn response(&self) -> Result<&ApiResponse, StateError> {
        match &self.outcome {
            Some(Ok(response)) => Ok(response),
            _ => Err(StateError::NoResponse),
        }
    }

    pub fn response_data(&self) -> Result<&Value, StateError> {
        self.response().map(|response| &response.data)
    }

    /// Typed view of the last response body
    pub fn prediction(&self) -> Result<Prediction, crate::AssertionError> {
        Ok(self.response()?.prediction()?)
    }

    pub fn has_error(&self) -> bool {
        matches!(self.outcome, Some(Err(_)))
    }

    pub fn error(&self) -> Result<&ApiError, StateError> {
        match &self.outcome {
            Some(Err(error)) => Ok(error),
            _ => Err(StateError::NoError),
        }
    }

    pub fn store_test_data(&mut self, key: impl Into<String>, value: impl Into<TestValue>) {
        self.test_data.insert(key.into(), value.into());
    }

    pub fn test_data(&self, key: &str) -> Option<&TestValue> {
        self.test_data.get(key)
    }

    pub fn has_test_data(&self, key: &str) -> bool {
        self.test_data.contains_key(key)
    }

    pub fn clear_test_data(&mut self) {
        self.test_data.clear();
    }

    /// Clears the outcome and all test data
    pub fn reset(&mut self) {
        self.outcome = None;
        self.clear_test_data();
    }

    fn required(&self, key: &str) -> Result<&TestValue, StateError> {
        self.test_data
            .get(key)
            .ok_or_else(|| StateError::MissingTestData(key.to_string()))
    }

    fn mismatch(key: &str, expected: &'static str, actual: &TestValue) -> StateError {
        StateError::WrongTestDataType {
            key: key.to_string(),
            expected,
            actual: actual.kind(),
        }
    }

    pub fn elapsed(&self, key: &str) -> Result<Duration, StateError> {
        match self.required(key)? {
            TestValue::Elapsed(duration) => Ok(*duration),
            other => Err(Self::mismatch(key, "an elapsed time", other)),
        }
    }

    pub fn text(&self, key: &str) -> Result<&str, StateError> {
        match self.required(key)? {
            TestValue::Text(text) => Ok(text),
            other => Err(Self::mismatch(key, "text", other)),
        }
    }

    pub fn names(&self, key: &str) -> Result<&[String], StateError> {
        match self.required(key)? {
            TestValue::Names(names) => Ok(names),
            other => Err(Self::mismatch(key, "a name list", other)),
        }
    }

    pub fn stored_response(&self, key: &str) -> Result<&ApiResponse, StateError> {
        match self.required(key)? {
            TestValue::Response(response) => Ok(response),
            other => Err(Self::mismatch(key, "a response", other)),
        }
    }

    pub fn responses(&self, key: &str) -> Result<&[ApiResponse], StateError> {
        match self.required(key)? {
            TestValue::Responses(responses) => Ok(responses),
            other => Err(Self::mismatch(key, "a response list", other)),
        }
    }

    pub fn outcomes(&self, key: &str) -> Result<&[ApiResult<ApiResponse>], StateError> {
        match self.required(key)? {
            TestValue::Outcomes(outcomes) => Ok(outcomes),
            other => Err(Self::mismatch(key, "an outcome list", other)),
        }
    }
}
