use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
    time::Instant,
};

use bytes::Bytes;
use reqwest::Method;

use super::adapter::{
    RestBytes, RestError, RestFuture, RestRequest, RestResponse, RestResult, RestTransport,
};

#[derive(Clone, Debug, Default)]
pub enum MockBehavior {
    #[default]
    Pass,
    ConnectError {
        reason: String,
    },
    ReceiveError {
        reason: String,
        status: Option<u16>,
    },
    Reject {
        status: u16,
        body: RestBytes,
    },
}

impl MockBehavior {
    pub fn connect_error(reason: impl Into<String>) -> Self {
        Self::ConnectError {
            reason: reason.into(),
        }
    }

    pub fn receive_error(reason: impl Into<String>, status: Option<u16>) -> Self {
        Self::ReceiveError {
            reason: reason.into(),
            status,
        }
    }

    pub fn reject(status: u16, body: impl Into<RestBytes>) -> Self {
        Self::Reject {
            status,
            body: body.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MockBehaviorPlan {
    request: VecDeque<MockBehavior>,
}

impl MockBehaviorPlan {
    pub fn push(&mut self, behavior: MockBehavior) -> &mut Self {
        self.request.push_back(behavior);
        self
    }

    fn pop(&mut self) -> MockBehavior {
        self.request.pop_front().unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, RestBytes)>,
    pub body: RestBytes,
}

impl MockResponse {
    pub fn new(status: u16, body: impl Into<RestBytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<RestBytes>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, body.into())
    }

    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::text(status, body).with_header("content-type", "application/json")
    }
}

#[derive(Clone, Debug)]
pub struct MockRestStateSnapshot {
    pub request_count: usize,
    pub last_url: Option<String>,
    pub last_status: Option<u16>,
    pub last_error: Option<String>,
    pub behavior_remaining: usize,
}

#[derive(Debug, Default)]
struct MockRestAdapterState {
    request_count: usize,
    last_url: Option<String>,
    last_status: Option<u16>,
    last_error: Option<String>,
    behavior_plan: MockBehaviorPlan,
    default_response_queue: VecDeque<MockResponse>,
    route_response_queues: HashMap<(Method, String), VecDeque<MockResponse>>,
    outbound_log: Vec<RestRequest>,
}

impl MockRestAdapterState {
    fn snapshot(&self) -> MockRestStateSnapshot {
        MockRestStateSnapshot {
            request_count: self.request_count,
            last_url: self.last_url.clone(),
            last_status: self.last_status,
            last_error: self.last_error.clone(),
            behavior_remaining: self.behavior_plan.request.len(),
        }
    }

    fn next_response(&mut self, request: &RestRequest) -> Option<MockResponse> {
        let route_key = (request.method.clone(), request.url.clone());
        if let Some(response) = self
            .route_response_queues
            .get_mut(&route_key)
            .and_then(VecDeque::pop_front)
        {
            return Some(response);
        }
        self.default_response_queue.pop_front()
    }
}

/// In-memory transport. Requests are recorded, behaviors are consumed in
/// order, and responses come from the per-route queue before the default one.
#[derive(Clone, Debug, Default)]
pub struct MockRestAdapter {
    state: Arc<Mutex<MockRestAdapterState>>,
}

impl MockRestAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior_plan(behavior_plan: MockBehaviorPlan) -> Self {
        let state = MockRestAdapterState {
            behavior_plan,
            ..MockRestAdapterState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn snapshot(&self) -> MockRestStateSnapshot {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while taking snapshot")
            .snapshot()
    }

    pub fn queue_response(&self, response: MockResponse) {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while queueing response")
            .default_response_queue
            .push_back(response);
    }

    pub fn queue_response_for(
        &self,
        method: Method,
        url: impl Into<String>,
        response: MockResponse,
    ) {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while queueing response by route")
            .route_response_queues
            .entry((method, url.into()))
            .or_default()
            .push_back(response);
    }

    pub fn queue_post_response(&self, url: impl Into<String>, response: MockResponse) {
        self.queue_response_for(Method::POST, url, response);
    }

    /// Requests seen so far, in arrival order.
    pub fn outbound(&self) -> Vec<RestRequest> {
        self.state
            .lock()
            .expect("mock transport mutex poisoned while reading outbound log")
            .outbound_log
            .clone()
    }

    fn record_error(&self, error: RestError) -> RestError {
        let mut state = self
            .state
            .lock()
            .expect("mock transport mutex poisoned while recording error");
        state.last_error = Some(error.message.clone());
        state.last_status = error.status;
        error
    }
}

impl RestTransport for MockRestAdapter {
    fn execute(&self, request: RestRequest) -> RestFuture<RestResult<RestResponse>> {
        let adapter = self.clone();
        Box::pin(async move {
            let start = Instant::now();
            let behavior = {
                let mut state = adapter
                    .state
                    .lock()
                    .expect("mock transport mutex poisoned while updating state before execute");
                state.request_count += 1;
                state.last_url = Some(request.url.clone());
                state.last_error = None;
                state.outbound_log.push(request.clone());
                state.behavior_plan.pop()
            };

            let response = match behavior {
                MockBehavior::Pass => adapter
                    .state
                    .lock()
                    .expect("mock transport mutex poisoned while selecting queued response")
                    .next_response(&request)
                    .unwrap_or_else(|| MockResponse::new(200, Bytes::new())),
                MockBehavior::ConnectError { reason } => {
                    return Err(adapter.record_error(RestError::connect(reason)));
                }
                MockBehavior::ReceiveError { reason, status } => {
                    return Err(adapter.record_error(RestError::receive(reason, status)));
                }
                // A rejection is still an answer from the server.
                MockBehavior::Reject { status, body } => MockResponse::new(status, body),
            };

            adapter
                .state
                .lock()
                .expect("mock transport mutex poisoned while recording inbound response")
                .last_status = Some(response.status);

            Ok(RestResponse {
                status: response.status,
                headers: response.headers,
                body: response.body,
                elapsed: start.elapsed(),
            })
        })
    }
}
