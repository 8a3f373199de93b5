use std::{io, process::ExitCode};

use env_logger::Env;
use log::{error, info};
use users_smoke::{Client, Outcome, SmokeConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = SmokeConfig::default();
    info!("POST {}", config.endpoint);

    let client = Client::new();
    let mut stdout = io::stdout().lock();
    match users_smoke::run(&client, &config, &mut stdout).await {
        Ok(report) => {
            match report.outcome {
                Outcome::Delivered { status } => info!("done, server answered {status}"),
                Outcome::Failed { .. } => info!("done, request failed"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("smoke run aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
