#![allow(non_snake_case)]

use std::process::ExitCode;

use dailyDashboard::cli;
use dailyDashboard::config::{AppConfig, DashboardSettings};
use dailyDashboard::logging::init_logging;
use dailyDashboard::runtime;
use log::error;

const DEFAULT_RUN_MODE: &str = "cli";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let settings = match DashboardSettings::from_config(&config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logging(&settings.log_level, settings.log_dir.as_deref()) {
        eprintln!("Failed to start logging: {}", e);
        return ExitCode::FAILURE;
    }

    let run_mode = settings.run_mode.clone();
    let result = if run_mode == "api" {
        runtime::run_api(settings).await
    } else if run_mode == DEFAULT_RUN_MODE {
        cli::cli(settings).await
    } else {
        Err(cli::unknown_run_mode(&run_mode))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("event=app_exit status=error error={}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
