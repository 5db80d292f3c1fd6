//! In-process stand-in for the age prediction service.
//!
//! Reproduces the parts of the public contract the scenarios exercise,
//! including its quirks, so the suite runs without network access.

use serde_json::{json, Value};
use tracing::info;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use crate::fixtures::{COMMON_NAMES, MAX_BATCH_SIZE, UNCOMMON_NAMES};

/// Handle to a running stub; the server stops when this is dropped
pub struct StubAgify {
    server: MockServer,
}

impl StubAgify {
    /// Starts the stub on a random local port
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        // Only GET / is routed; wiremock answers everything else with 404,
        // which is also what the real service does for POST /.
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(PredictionResponder)
            .mount(&server)
            .await;

        info!(uri = %server.uri(), "Stub age prediction service started");
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Number of requests the stub has received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

struct PredictionResponder;

impl Respond for PredictionResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut name = None;
        let mut batch = Vec::new();
        let mut country_id = None;
        let mut api_key = None;

        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "name" => name = Some(value.into_owned()),
                "name[]" => batch.push(value.into_owned()),
                "country_id" => country_id = Some(value.into_owned()),
                "apikey" => api_key = Some(value.into_owned()),
                _ => {}
            }
        }

        // The stub knows no valid keys
        if api_key.is_some() {
            return error(401, "Invalid API key");
        }

        if !batch.is_empty() {
            if batch.len() > MAX_BATCH_SIZE || batch.iter().any(|n| n.is_empty()) {
                return error(422, "Invalid 'name' parameter");
            }
            let body: Vec<Value> = batch
                .iter()
                .map(|n| predict(n, country_id.as_deref()))
                .collect();
            return ResponseTemplate::new(200).set_body_json(Value::Array(body));
        }

        match name {
            None => error(422, "Missing 'name' parameter"),
            Some(n) if n.is_empty() => error(422, "Invalid 'name' parameter"),
            Some(n) => ResponseTemplate::new(200).set_body_json(predict(&n, country_id.as_deref())),
        }
    }
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": message }))
}

/// Deterministic prediction for `name`; case-insensitive like the real data
fn predict(name: &str, country_id: Option<&str>) -> Value {
    let folded = name.to_lowercase();
    let seed = fnv1a(&folded);

    let (age, count) = if UNCOMMON_NAMES.contains(&folded.as_str()) {
        (Value::Null, 0)
    } else if COMMON_NAMES.contains(&folded.as_str()) {
        (json!(18 + seed % 60), 100_000 + seed % 50_000)
    } else {
        (json!(18 + seed % 60), 500 + seed % 9_500)
    };

    let mut body = json!({ "name": name, "age": age, "count": count });
    if let Some(country) = country_id {
        body["country_id"] = json!(country);
    }
    body
}

fn fnv1a(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}
