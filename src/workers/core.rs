//! Core worker utilities

use crate::events::{Event, FetchOutcome, Resource};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    ///
    /// Events are mirrored to the `log` facade. A closed channel means the view is
    /// gone, so the event is dropped.
    pub async fn send_event(&self, event: Event) {
        log::log!(
            log::Level::from(event.log_level),
            "{}: {}",
            event.resource,
            event.msg
        );
        let _ = self.sender.send(event).await;
    }

    pub async fn send_refresh_event(&self, resource: Resource, message: String) {
        self.send_event(Event::refresh(resource, message)).await;
    }

    pub async fn send_outcome_event(
        &self,
        outcome: FetchOutcome,
        message: String,
        log_level: LogLevel,
    ) {
        self.send_event(Event::completed(outcome, message, log_level))
            .await;
    }
}
