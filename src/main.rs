// Main entry point - Dependency injection and panel setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;

use crate::application::export_trigger::ExportTrigger;
use crate::application::fetch_controller::FetchController;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_repository::HttpAnalysisRepository;
use crate::presentation::panel::Panel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr so the alternate screen on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpAnalysisRepository::new(config.service.base_url.clone()));

    // Create controller and export trigger (application layer)
    let controller = FetchController::new(repository);
    let export = ExportTrigger::new(config.service.export_url());

    // Run the panel (presentation layer)
    let mut panel = Panel::new(controller, export, Duration::from_millis(config.ui.tick_ms))?;
    let result = panel.run();
    panel.restore()?;

    result
}
