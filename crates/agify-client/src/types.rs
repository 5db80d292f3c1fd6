use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One age prediction as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub name: String,
    /// `null` when the service has no data for the name
    pub age: Option<u32>,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
}

/// A successful (2xx) answer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Decoded JSON body; non-JSON bodies are kept as a JSON string
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, data: Value) -> Self {
        Self { status, data }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Single-name view of the body
    pub fn prediction(&self) -> serde_json::Result<Prediction> {
        Prediction::deserialize(&self.data)
    }

    /// Batch view of the body, in the order the service returned it
    pub fn predictions(&self) -> serde_json::Result<Vec<Prediction>> {
        Vec::<Prediction>::deserialize(&self.data)
    }
}
