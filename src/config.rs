use crate::payload::CreateUser;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/users";
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Everything a run needs. The defaults are the fixed smoke-test values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmokeConfig {
    pub endpoint: String,
    pub payload: CreateUser,
}

impl SmokeConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: CreateUser::default(),
        }
    }
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
