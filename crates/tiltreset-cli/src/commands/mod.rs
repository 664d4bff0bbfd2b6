pub mod config;
pub mod dashboard;
pub mod practice;
pub mod wallet;
pub mod wisdom;

use std::sync::Arc;

use tiltreset_core::{App, SystemClock};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// App wired with the system clock and the configured mock services.
pub fn build_app() -> Result<App, Box<dyn std::error::Error>> {
    let app = App::from_config_file(Arc::new(SystemClock))?;
    tracing::debug!(seal_target_days = app.config.streak.seal_target_days, "app wired");
    Ok(app)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
