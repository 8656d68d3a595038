mod config;
mod main_lib;

use std::process::ExitCode;

use config::Config;
use main_lib::{init_tracing, report, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let result = match Config::from_env() {
        Ok(config) => {
            tracing::debug!("Loaded configuration: {:?}", config);
            run(&config).await
        }
        Err(e) => Err(anyhow::Error::new(e).context("Invalid configuration")),
    };

    report(&result)
}
