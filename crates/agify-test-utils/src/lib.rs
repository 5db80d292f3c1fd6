//! Testing utilities for the agify.io test suite.
//!
//! Provides the per-scenario state container, assertion helpers, test data,
//! an in-process stub of the service, and logging setup.

pub mod assertions;
pub mod error;
pub mod fixtures;
pub mod helpers;
pub mod logging;
pub mod state;
pub mod stub;
pub mod target;

pub use assertions::{ensure, fail, AssertionError, AssertionResult};
pub use error::StateError;
pub use state::{keys, Phase, ScenarioState, TestValue};
pub use stub::StubAgify;
pub use target::SuiteTarget;
