//! Event System
//!
//! Fetch results travel from the refresh worker to the UI as events. An event is a
//! line for the activity log and, when a fetch completed, the outcome the view-state
//! reducer applies.

use crate::logging::{LogLevel, display_threshold};
use crate::proxy::types::{HealthStatus, ModelDescriptor};
use chrono::Local;
use std::fmt::Display;

/// The remote resource an event is about.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Resource {
    Health,
    Models,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A fetch was issued.
    Refresh,
    Success,
    Error,
}

/// Completion of a single fetch, as consumed by `ViewState::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    HealthLoaded(HealthStatus),
    HealthFailed,
    ModelsLoaded(Vec<ModelDescriptor>),
    ModelsFailed,
}

impl FetchOutcome {
    pub fn resource(&self) -> Resource {
        match self {
            FetchOutcome::HealthLoaded(_) | FetchOutcome::HealthFailed => Resource::Health,
            FetchOutcome::ModelsLoaded(_) | FetchOutcome::ModelsFailed => Resource::Models,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub resource: Resource,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Set once the fetch has resolved
    pub outcome: Option<FetchOutcome>,
}

impl Event {
    fn new(resource: Resource, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            resource,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome: None,
        }
    }

    /// A fetch of `resource` has been issued.
    pub fn refresh(resource: Resource, msg: String) -> Self {
        Self::new(resource, msg, EventType::Refresh, LogLevel::Debug)
    }

    /// A fetch completed. Success or failure follows from the outcome.
    pub fn completed(outcome: FetchOutcome, msg: String, log_level: LogLevel) -> Self {
        let event_type = match outcome {
            FetchOutcome::HealthLoaded(_) | FetchOutcome::ModelsLoaded(_) => EventType::Success,
            FetchOutcome::HealthFailed | FetchOutcome::ModelsFailed => EventType::Error,
        };
        let mut event = Self::new(outcome.resource(), msg, event_type, log_level);
        event.outcome = Some(outcome);
        event
    }

    pub fn should_display(&self) -> bool {
        self.shown_at(display_threshold())
    }

    /// Completed fetches and anything at info or above are always shown.
    fn shown_at(&self, threshold: LogLevel) -> bool {
        self.event_type == EventType::Success
            || self.log_level >= LogLevel::Info
            || self.log_level >= threshold
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.resource, self.msg
        )
    }
}
