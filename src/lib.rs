//! Smoke test for the users service: post one fixed create-user payload and
//! print whatever comes back. The transport is a thin wrapper around reqwest
//! with an in-memory mock for deterministic tests.

pub mod adapter;
pub mod config;
pub mod error;
pub mod mock;
pub mod payload;
pub mod runner;

pub use reqwest::Method;

pub use adapter::{
    Client, ReqwestTransport, RestBytes, RestError, RestErrorKind, RestFuture, RestRequest,
    RestResponse, RestResult, RestTransport,
};
pub use config::{DEFAULT_ENDPOINT, JSON_UTF8, SmokeConfig};
pub use error::{SmokeError, SmokeResult};
pub use mock::{
    MockBehavior, MockBehaviorPlan, MockResponse, MockRestAdapter, MockRestStateSnapshot,
};
pub use payload::{CreateUser, PayloadFile};
pub use runner::{ApiEnvelope, Outcome, RunReport, run};
