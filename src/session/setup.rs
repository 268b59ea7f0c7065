//! Session setup and initialization

use crate::config::DashboardSettings;
use crate::environment::Environment;
use crate::events::Event;
use crate::proxy::ProxyClient;
use crate::runtime::start_refresh_worker;
use crate::workers::refresher::RefreshHandle;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for refresh worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Owns the periodic refresh timer; shut down when the session ends
    pub refresh_handle: RefreshHandle,
    /// The proxy being monitored
    pub environment: Environment,
    /// Interval of the timed refresh
    pub refresh_interval: Duration,
}

/// Sets up a dashboard session
///
/// Builds the proxy client and starts the refresh worker, which issues the initial
/// health and models fetches right away. Must be called inside the tokio runtime.
pub fn setup_session(settings: DashboardSettings) -> Result<SessionData, Box<dyn Error>> {
    if settings.api_key.is_none() {
        crate::print_cmd_warn!(
            "No API key",
            "Requests are sent without credentials. Set LITELLM_API_KEY or pass --api-key if the proxy requires one."
        );
    }

    let client = ProxyClient::new(settings.environment.clone(), settings.api_key)?;
    let (event_receiver, refresh_handle) =
        start_refresh_worker(Arc::new(client), settings.refresh_interval);

    Ok(SessionData {
        event_receiver,
        refresh_handle,
        environment: settings.environment,
        refresh_interval: settings.refresh_interval,
    })
}
