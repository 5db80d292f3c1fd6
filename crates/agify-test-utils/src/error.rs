use thiserror::Error;

/// Error types for reading scenario state
#[derive(Debug, Error)]
pub enum StateError {
    /// No successful call has been recorded in this scenario
    #[error("No response available. Make sure to call the API first.")]
    NoResponse,

    /// No failed call has been recorded in this scenario
    #[error("No error available.")]
    NoError,

    /// Nothing stored under the key
    #[error("No test data stored under '{0}'")]
    MissingTestData(String),

    /// Something else stored under the key
    #[error("Test data '{key}' holds {actual}, expected {expected}")]
    WrongTestDataType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}
