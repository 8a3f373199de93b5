use std::{io::Write, path::PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;

use crate::{
    adapter::{Client, RestError, RestRequest, RestResponse},
    config::{JSON_UTF8, SmokeConfig},
    error::{SmokeError, SmokeResult},
    payload::PayloadFile,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered with a 2xx status.
    Delivered { status: u16 },
    /// The request failed. `status` is set when the server did answer.
    Failed { status: Option<u16> },
}

#[derive(Clone, Debug)]
pub struct RunReport {
    pub outcome: Outcome,
    pub payload_path: PathBuf,
}

/// The `message` and `status` of a users service reply. `data` is not read.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub message: String,
    pub status: String,
}

/// Sends the configured payload once and writes what happened to `out`.
///
/// A failed request is reported on `out` and yields [`Outcome::Failed`];
/// only local problems (payload file, writing to `out`) return `Err`. The
/// payload file is gone by the time this returns, whichever way it returns.
pub async fn run<W: Write>(
    client: &Client,
    config: &SmokeConfig,
    out: &mut W,
) -> SmokeResult<RunReport> {
    let file = PayloadFile::create(&config.payload)?;
    let payload_path = file.path().to_path_buf();
    let body = file.contents()?;
    debug!(
        "payload file {} holds {} bytes: {}",
        payload_path.display(),
        body.len(),
        String::from_utf8_lossy(&body)
    );

    let request = RestRequest::post(config.endpoint.as_str())
        .with_header("Content-Type", JSON_UTF8)
        .with_body(body);

    let outcome = match client.execute_checked(request).await {
        Ok(response) => {
            report_success(out, &response)?;
            Outcome::Delivered {
                status: response.status(),
            }
        }
        Err(err) => {
            warn!("POST {} failed: {err}", config.endpoint);
            report_failure(out, &err)?;
            Outcome::Failed { status: err.status }
        }
    };

    file.close()?;
    Ok(RunReport {
        outcome,
        payload_path,
    })
}

fn report_success<W: Write>(out: &mut W, response: &RestResponse) -> SmokeResult<()> {
    info!(
        "server answered {} in {:?}",
        response.status(),
        response.elapsed
    );
    if let Ok(envelope) = response.json::<ApiEnvelope>() {
        info!("server status={} message={}", envelope.status, envelope.message);
    }
    writeln!(out, "Status code: {}", response.status())
        .and_then(|()| writeln!(out, "Response body:"))
        .and_then(|()| writeln!(out, "{}", response.text()))
        .map_err(SmokeError::Report)
}

fn report_failure<W: Write>(out: &mut W, err: &RestError) -> SmokeResult<()> {
    writeln!(out, "Request failed: {err}").map_err(SmokeError::Report)?;
    if let Some(body) = err.body_text() {
        writeln!(out, "Error response body:")
            .and_then(|()| writeln!(out, "{body}"))
            .map_err(SmokeError::Report)?;
    }
    Ok(())
}
