//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::print_cmd_info;
use crate::view_state::ViewState;
use std::error::Error;

/// Runs the application in headless mode
///
/// Events are printed to the console as they arrive and folded into a [`ViewState`];
/// a one-line summary is printed after every completed fetch. Runs until Ctrl+C.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    let SessionData {
        mut event_receiver,
        refresh_handle,
        ..
    } = session;
    let mut view = ViewState::new();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            event = event_receiver.recv() => {
                let Some(event) = event else { break };
                if event.should_display() {
                    println!("{}", event);
                }
                if let Some(outcome) = event.outcome {
                    view = view.reduce(outcome);
                    print_cmd_info!("Status", "{}", summarize(&view));
                }
            }
        }
    }

    print_session_shutdown();
    refresh_handle.shutdown().await;
    print_session_exit_success();

    Ok(())
}

/// One-line summary of the current view-state
fn summarize(view: &ViewState) -> String {
    let models = if view.is_loading() {
        "loading".to_string()
    } else {
        view.models().len().to_string()
    };
    match view.error() {
        Some(error) => format!(
            "health={} models={} error=\"{}\"",
            view.health_label(),
            models,
            error
        ),
        None => format!("health={} models={}", view.health_label(), models),
    }
}
