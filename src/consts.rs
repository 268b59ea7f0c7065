pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the refresh worker and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of pending manual refresh requests
    pub const REFRESH_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // PROXY CONFIGURATION
    // =============================================================================

    /// Proxy URL used when none is configured
    pub const DEFAULT_PROXY_URL: &str = "http://localhost:5000";

    /// Endpoints shown in the API endpoints panel and probed by `check`
    pub mod endpoints {
        pub const HEALTH: &str = "/health";
        pub const HEALTH_LIVELINESS: &str = "/health/liveliness";
        pub const HEALTH_READINESS: &str = "/health/readiness";
        pub const MODELS: &str = "/models";
        pub const CHAT_COMPLETIONS: &str = "/v1/chat/completions";
        pub const COMPLETIONS: &str = "/v1/completions";
    }

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Periodic refresh configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between timed refreshes of health and models (milliseconds)
        pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30_000;

        /// Smallest accepted refresh interval (seconds)
        pub const MIN_REFRESH_INTERVAL_SECS: u64 = 1;

        pub const fn default_refresh_interval() -> Duration {
            Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // USER-FACING MESSAGES
    // =============================================================================

    pub mod messages {
        pub const HEALTH_FETCH_FAILED: &str = "Failed to fetch health status";
        pub const MODELS_FETCH_FAILED: &str = "Failed to fetch models";
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the dashboard is shown
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Key event poll timeout, which is also the redraw cadence
        pub const INPUT_POLL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn input_poll() -> Duration {
            Duration::from_millis(INPUT_POLL_MS)
        }
    }
}
