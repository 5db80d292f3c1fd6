//! Chooses the service a test run talks to.

use agify_client::ClientConfig;
use tracing::info;

use crate::stub::StubAgify;

/// The service under test. Holding it keeps a started stub alive.
pub struct SuiteTarget {
    config: ClientConfig,
    stub: Option<StubAgify>,
}

impl SuiteTarget {
    /// The live service at `base_url` when one is given, otherwise a freshly
    /// started [`StubAgify`]
    pub async fn resolve(base_url: Option<String>) -> Self {
        match base_url {
            Some(url) => {
                info!(%url, "Running against live service");
                Self {
                    config: ClientConfig::new(url),
                    stub: None,
                }
            }
            None => {
                let stub = StubAgify::start().await;
                Self {
                    config: ClientConfig::new(stub.uri()),
                    stub: Some(stub),
                }
            }
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_stubbed(&self) -> bool {
        self.stub.is_some()
    }
}
