//! Dashboard view-state and the reducer that advances it.
//!
//! Health and model fetches resolve independently and in any order. Every
//! completion is applied here as a [`FetchOutcome`], so the resulting state depends
//! only on the order in which outcomes arrive:
//!
//! - a failed fetch keeps the last value that was loaded for that resource;
//! - `error` holds a single message and the most recent failure wins;
//! - a successful health fetch clears `error`, a successful models fetch does not;
//! - `loading` starts `true` and drops to `false` on the first models outcome,
//!   never to be raised again.

use crate::consts::cli_consts::messages::{HEALTH_FETCH_FAILED, MODELS_FETCH_FAILED};
use crate::events::FetchOutcome;
use crate::proxy::types::{HealthStatus, ModelDescriptor};

/// Binary classification of the proxy's health document.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum HealthLabel {
    Healthy,
    Unhealthy,
    Unknown,
}

/// Styling class derived from a [`HealthLabel`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StatusClass {
    Healthy,
    Unhealthy,
}

impl HealthLabel {
    pub fn from_status(status: Option<&HealthStatus>) -> Self {
        match status {
            None => HealthLabel::Unknown,
            Some(status) if status.has_healthy_endpoints() => HealthLabel::Healthy,
            Some(_) => HealthLabel::Unhealthy,
        }
    }

    /// Anything short of healthy is styled as unhealthy, including `Unknown`.
    pub fn status_class(self) -> StatusClass {
        match self {
            HealthLabel::Healthy => StatusClass::Healthy,
            HealthLabel::Unhealthy | HealthLabel::Unknown => StatusClass::Unhealthy,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    health_status: Option<HealthStatus>,
    models: Vec<ModelDescriptor>,
    loading: bool,
    error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            health_status: None,
            models: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Apply one fetch outcome in place.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::HealthLoaded(status) => {
                self.health_status = Some(status);
                self.error = None;
            }
            FetchOutcome::HealthFailed => {
                self.error = Some(HEALTH_FETCH_FAILED.to_string());
            }
            FetchOutcome::ModelsLoaded(models) => {
                self.models = models;
                self.loading = false;
            }
            FetchOutcome::ModelsFailed => {
                self.error = Some(MODELS_FETCH_FAILED.to_string());
                self.loading = false;
            }
        }
    }

    /// Next state after `outcome`.
    pub fn reduce(mut self, outcome: FetchOutcome) -> Self {
        self.apply(outcome);
        self
    }

    pub fn health_status(&self) -> Option<&HealthStatus> {
        self.health_status.as_ref()
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn health_label(&self) -> HealthLabel {
        HealthLabel::from_status(self.health_status.as_ref())
    }
}
