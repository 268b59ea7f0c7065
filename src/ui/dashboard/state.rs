//! Dashboard state management
//!
//! Contains the dashboard state struct shown by the TUI

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::ui::app::UIConfig;
use crate::view_state::ViewState;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Time left until the next timed refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshCountdown {
    pub remaining_secs: u64,
    /// How much of the current interval has elapsed, 0-100
    pub progress_percent: u16,
}

/// Dashboard state with the latest fetched data and activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The proxy being monitored.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Interval of the timed refresh.
    pub refresh_interval: Duration,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Countdown to the next timed refresh
    pub refresh_countdown: RefreshCountdown,

    /// Latest health and model data
    view: ViewState,
    /// Whether the raw health document is expanded
    show_health_details: bool,
    /// Index of the first model shown in the models panel
    model_scroll: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            refresh_interval: ui_config.refresh_interval,
            with_background_color: ui_config.with_background_color,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            refresh_countdown: RefreshCountdown::default(),
            view: ViewState::new(),
            show_health_details: false,
            model_scroll: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn show_health_details(&self) -> bool {
        self.show_health_details
    }

    pub fn toggle_health_details(&mut self) {
        self.show_health_details = !self.show_health_details;
    }

    pub fn model_scroll(&self) -> usize {
        self.model_scroll
    }

    pub fn scroll_models_up(&mut self) {
        self.model_scroll = self.model_scroll.saturating_sub(1);
    }

    pub fn scroll_models_down(&mut self) {
        let last = self.view.models().len().saturating_sub(1);
        self.model_scroll = (self.model_scroll + 1).min(last);
    }

    /// Keep the scroll position inside the current model list
    pub fn clamp_model_scroll(&mut self) {
        let last = self.view.models().len().saturating_sub(1);
        self.model_scroll = self.model_scroll.min(last);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
