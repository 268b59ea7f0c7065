//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardState, RefreshCountdown};

use crate::events::Event;

impl DashboardState {
    /// Update the dashboard state with queued events and the refresh countdown.
    pub fn update(&mut self) {
        // Process all queued events one by one, in arrival order
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }

        self.update_refresh_countdown();
    }

    /// Apply the fetch outcome carried by an event, if any
    fn process_event(&mut self, event: &Event) {
        if let Some(outcome) = &event.outcome {
            self.view_mut().apply(outcome.clone());
            self.clamp_model_scroll();
        }
    }

    /// The timer ticks at start and then every interval, so the phase is derived
    /// from the elapsed time since start.
    fn update_refresh_countdown(&mut self) {
        let interval_ms = self.refresh_interval.as_millis().max(1);
        let into_interval_ms = self.start_time.elapsed().as_millis() % interval_ms;
        let remaining_ms = interval_ms - into_interval_ms;

        self.refresh_countdown = RefreshCountdown {
            remaining_secs: remaining_ms.div_ceil(1000) as u64,
            progress_percent: ((into_interval_ms * 100) / interval_ms) as u16,
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
    use crate::environment::Environment;
    use crate::events::{Event, FetchOutcome, Resource};
    use crate::logging::LogLevel;
    use crate::proxy::types::{HealthStatus, ModelDescriptor};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::DashboardState;
    use crate::view_state::HealthLabel;
    use serde_json::json;
    use std::time::{Duration, Instant};

    fn dashboard() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(30)),
        )
    }

    fn models(n: usize) -> Vec<ModelDescriptor> {
        (0..n)
            .map(|i| ModelDescriptor {
                id: format!("model-{i}"),
                object: "model".to_string(),
                created: 1700000000,
                owned_by: "owner".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_update_applies_outcomes_in_order() {
        let mut state = dashboard();
        state.add_event(Event::refresh(Resource::Health, "requesting".to_string()));
        state.add_event(Event::completed(
            FetchOutcome::HealthLoaded(HealthStatus::new(json!({"healthy_endpoints": ["a"]}))),
            "ok".to_string(),
            LogLevel::Info,
        ));
        state.add_event(Event::completed(
            FetchOutcome::ModelsLoaded(models(2)),
            "ok".to_string(),
            LogLevel::Info,
        ));
        state.add_event(Event::completed(
            FetchOutcome::HealthFailed,
            "down".to_string(),
            LogLevel::Warn,
        ));

        state.update();

        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), 4);
        assert_eq!(state.view().health_label(), HealthLabel::Healthy);
        assert_eq!(state.view().models().len(), 2);
        assert!(!state.view().is_loading());
        assert_eq!(state.view().error(), Some("Failed to fetch health status"));
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = dashboard();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_event(Event::refresh(Resource::Models, format!("event {i}")));
        }
        state.update();

        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 10");
    }

    #[test]
    fn test_model_scroll_is_clamped_when_list_shrinks() {
        let mut state = dashboard();
        state.add_event(Event::completed(
            FetchOutcome::ModelsLoaded(models(5)),
            "ok".to_string(),
            LogLevel::Info,
        ));
        state.update();
        for _ in 0..10 {
            state.scroll_models_down();
        }
        assert_eq!(state.model_scroll(), 4);

        state.add_event(Event::completed(
            FetchOutcome::ModelsLoaded(models(2)),
            "ok".to_string(),
            LogLevel::Info,
        ));
        state.update();
        assert_eq!(state.model_scroll(), 1);

        state.scroll_models_up();
        state.scroll_models_up();
        assert_eq!(state.model_scroll(), 0);
    }

    #[test]
    fn test_refresh_countdown_starts_near_full_interval() {
        let mut state = dashboard();
        state.update();
        assert!(state.refresh_countdown.remaining_secs <= 30);
        assert!(state.refresh_countdown.remaining_secs >= 29);
        assert!(state.refresh_countdown.progress_percent < 5);
    }

    #[test]
    fn test_toggle_health_details() {
        let mut state = dashboard();
        assert!(!state.show_health_details());
        state.toggle_health_details();
        assert!(state.show_health_details());
    }
}
