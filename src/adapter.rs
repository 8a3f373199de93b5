use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    time::{Duration, Instant},
};

use bytes::Bytes;
use reqwest::header::HeaderValue;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type RestBytes = Bytes;
pub type RestFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
pub type RestResult<T> = Result<T, RestError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestErrorKind {
    Connect,
    Send,
    Receive,
    Rejected,
    Parse,
    Internal,
}

/// A failed exchange. When the server did answer (non-2xx), `status` and
/// `body` hold what it sent back.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct RestError {
    pub kind: RestErrorKind,
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<RestBytes>,
}

impl RestError {
    pub fn new(kind: RestErrorKind, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            body: None,
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(RestErrorKind::Connect, None, message)
    }

    pub fn receive(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::new(RestErrorKind::Receive, status, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(RestErrorKind::Internal, None, message)
    }

    pub fn rejected(status: u16, body: impl Into<RestBytes>) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown Status");
        Self {
            kind: RestErrorKind::Rejected,
            status: Some(status),
            message: format!("server returned ({status}) {reason}"),
            body: Some(body.into()),
        }
    }

    fn from_reqwest(fallback: RestErrorKind, err: reqwest::Error) -> Self {
        let kind = if err.is_connect() {
            RestErrorKind::Connect
        } else {
            fallback
        };
        Self::new(kind, err.status().map(|s| s.as_u16()), err.to_string())
    }

    pub fn from_sonic(err: sonic_rs::Error) -> Self {
        Self::new(RestErrorKind::Parse, None, err.to_string())
    }

    pub fn kind(&self) -> RestErrorKind {
        self.kind
    }

    /// The response body as text, when the failure carried one.
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_ref()
            .map(|body| String::from_utf8_lossy(body).into_owned())
    }
}

#[derive(Clone, Debug)]
pub struct RestRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, RestBytes)>,
    pub body: Option<RestBytes>,
}

impl RestRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<RestBytes>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<RestBytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// First header matching `key`, compared case-insensitively.
    pub fn header(&self, key: &str) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_ref())
    }
}

#[derive(Clone, Debug)]
pub struct RestResponse {
    pub status: u16,
    pub headers: Vec<(String, RestBytes)>,
    pub body: RestBytes,
    pub elapsed: Duration,
}

impl RestResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> RestResult<T> {
        sonic_rs::from_slice(&self.body).map_err(RestError::from_sonic)
    }
}

pub trait RestTransport: Send + Sync {
    fn execute(&self, request: RestRequest) -> RestFuture<RestResult<RestResponse>>;
}

pub type SharedRestTransport = dyn RestTransport + Send + Sync;

#[derive(Clone)]
pub struct Client {
    transport: Arc<SharedRestTransport>,
}

impl Client {
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }

    pub fn with_transport<T>(transport: T) -> Self
    where
        T: RestTransport + 'static,
    {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub async fn execute(&self, request: RestRequest) -> RestResult<RestResponse> {
        self.transport.execute(request).await
    }

    /// Like [`Client::execute`], but a non-2xx answer becomes a
    /// [`RestErrorKind::Rejected`] error carrying the response body.
    pub async fn execute_checked(&self, request: RestRequest) -> RestResult<RestResponse> {
        let response = self.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(RestError::rejected(response.status, response.body))
        }
    }

    pub async fn post(
        &self,
        url: impl Into<String>,
        body: impl Into<RestBytes>,
    ) -> RestResult<RestResponse> {
        self.execute(RestRequest::post(url).with_body(body)).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: ReqwestClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: ReqwestClient::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RestTransport for ReqwestTransport {
    fn execute(&self, request: RestRequest) -> RestFuture<RestResult<RestResponse>> {
        let client = self.client.clone();
        Box::pin(async move {
            let start = Instant::now();
            let mut req = client.request(request.method.clone(), &request.url);

            for (key, value) in request.headers {
                let value = HeaderValue::from_bytes(value.as_ref())
                    .map_err(|err| RestError::internal(err.to_string()))?;
                req = req.header(key, value);
            }

            if let Some(body) = request.body {
                req = req.body(body);
            }

            let resp = req
                .send()
                .await
                .map_err(|err| RestError::from_reqwest(RestErrorKind::Send, err))?;

            let status = resp.status().as_u16();
            let headers = resp
                .headers()
                .iter()
                .map(|(name, value)| (name.to_string(), Bytes::copy_from_slice(value.as_ref())))
                .collect();
            let body = resp
                .bytes()
                .await
                .map_err(|err| RestError::from_reqwest(RestErrorKind::Receive, err))?;

            Ok(RestResponse {
                status,
                headers,
                body,
                elapsed: start.elapsed(),
            })
        })
    }
}
