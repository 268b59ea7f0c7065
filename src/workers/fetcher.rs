//! Health and model fetching with event reporting

use super::core::EventSender;
use crate::consts::cli_consts::messages::{HEALTH_FETCH_FAILED, MODELS_FETCH_FAILED};
use crate::events::{FetchOutcome, Resource};
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::proxy::ProxyApi;
use crate::proxy::error::ProxyError;
use crate::proxy::types::{HealthStatus, ModelDescriptor};
use crate::view_state::HealthLabel;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{msg}: {0}", msg = HEALTH_FETCH_FAILED)]
    Health(#[source] ProxyError),

    #[error("{msg}: {0}", msg = MODELS_FETCH_FAILED)]
    Models(#[source] ProxyError),
}

/// Performs single fetches against the proxy and reports each one as events.
///
/// Fetches never retry: a failure is reported once and the next timed or manual
/// refresh is the only recovery.
#[derive(Clone)]
pub struct ResourceFetcher {
    proxy: Arc<dyn ProxyApi>,
    event_sender: EventSender,
    error_handler: ErrorHandler,
}

impl ResourceFetcher {
    pub fn new(proxy: Arc<dyn ProxyApi>, event_sender: EventSender) -> Self {
        Self {
            proxy,
            event_sender,
            error_handler: ErrorHandler::new(),
        }
    }

    /// Fetch the health document and report the outcome
    pub async fn fetch_health(&self) -> Result<HealthStatus, FetchError> {
        self.event_sender
            .send_refresh_event(Resource::Health, "Requesting health status...".to_string())
            .await;

        match self.proxy.get_health().await {
            Ok(status) => {
                let healthy = status.healthy_endpoints().map_or(0, Vec::len);
                let label = HealthLabel::from_status(Some(&status));
                self.event_sender
                    .send_outcome_event(
                        FetchOutcome::HealthLoaded(status.clone()),
                        format!("Status {} ({} healthy endpoints)", label, healthy),
                        LogLevel::Info,
                    )
                    .await;
                Ok(status)
            }
            Err(e) => {
                let log_level = self.error_handler.classify_error(&e);
                self.event_sender
                    .send_outcome_event(
                        FetchOutcome::HealthFailed,
                        format!("Health check error: {}", e),
                        log_level,
                    )
                    .await;
                Err(FetchError::Health(e))
            }
        }
    }

    /// Fetch the model list and report the outcome
    pub async fn fetch_models(&self) -> Result<Vec<ModelDescriptor>, FetchError> {
        self.event_sender
            .send_refresh_event(Resource::Models, "Requesting models...".to_string())
            .await;

        match self.proxy.get_models().await {
            Ok(models) => {
                self.event_sender
                    .send_outcome_event(
                        FetchOutcome::ModelsLoaded(models.clone()),
                        format!("Loaded {} models", models.len()),
                        LogLevel::Info,
                    )
                    .await;
                Ok(models)
            }
            Err(e) => {
                let log_level = self.error_handler.classify_error(&e);
                self.event_sender
                    .send_outcome_event(
                        FetchOutcome::ModelsFailed,
                        format!("Models fetch error: {}", e),
                        log_level,
                    )
                    .await;
                Err(FetchError::Models(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, EventType};
    use crate::proxy::MockProxyApi;
    use serde_json::json;
    use tokio::sync::mpsc;

    fn fetcher_with(mock: MockProxyApi) -> (ResourceFetcher, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(16);
        let fetcher = ResourceFetcher::new(Arc::new(mock), EventSender::new(sender));
        (fetcher, receiver)
    }

    #[tokio::test]
    async fn test_fetch_health_reports_loaded_outcome() {
        let mut mock = MockProxyApi::new();
        mock.expect_get_health()
            .times(1)
            .returning(|| Ok(HealthStatus::new(json!({"healthy_endpoints": ["a", "b"]}))));
        let (fetcher, mut events) = fetcher_with(mock);

        let status = fetcher.fetch_health().await.unwrap();
        assert!(status.has_healthy_endpoints());

        let refresh = events.recv().await.unwrap();
        assert_eq!(refresh.event_type, EventType::Refresh);
        assert_eq!(refresh.resource, Resource::Health);

        let done = events.recv().await.unwrap();
        assert_eq!(done.event_type, EventType::Success);
        assert_eq!(done.msg, "Status Healthy (2 healthy endpoints)");
        assert_eq!(done.outcome, Some(FetchOutcome::HealthLoaded(status)));
    }

    #[tokio::test]
    async fn test_fetch_health_failure_is_classified() {
        let mut mock = MockProxyApi::new();
        mock.expect_get_health().times(1).returning(|| {
            Err(ProxyError::Http {
                status: 401,
                message: "bad key".to_string(),
            })
        });
        let (fetcher, mut events) = fetcher_with(mock);

        let err = fetcher.fetch_health().await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to fetch health status"));

        let _refresh = events.recv().await.unwrap();
        let failed = events.recv().await.unwrap();
        assert_eq!(failed.event_type, EventType::Error);
        assert_eq!(failed.log_level, LogLevel::Error);
        assert_eq!(failed.outcome, Some(FetchOutcome::HealthFailed));
        assert!(failed.msg.contains("401"));
    }

    #[tokio::test]
    async fn test_fetch_models_reports_models_in_order() {
        let models = vec![
            ModelDescriptor {
                id: "gpt-4".to_string(),
                object: "model".to_string(),
                created: 1700000000,
                owned_by: "openai".to_string(),
            },
            ModelDescriptor {
                id: "llama3".to_string(),
                object: "model".to_string(),
                created: 1700000100,
                owned_by: "meta".to_string(),
            },
        ];
        let returned = models.clone();
        let mut mock = MockProxyApi::new();
        mock.expect_get_models()
            .times(1)
            .returning(move || Ok(returned.clone()));
        let (fetcher, mut events) = fetcher_with(mock);

        assert_eq!(fetcher.fetch_models().await.unwrap(), models);

        let _refresh = events.recv().await.unwrap();
        let done = events.recv().await.unwrap();
        assert_eq!(done.msg, "Loaded 2 models");
        assert_eq!(done.outcome, Some(FetchOutcome::ModelsLoaded(models)));
    }

    #[tokio::test]
    async fn test_fetch_models_failure_reports_models_failed() {
        let mut mock = MockProxyApi::new();
        mock.expect_get_models().times(1).returning(|| {
            Err(ProxyError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        let (fetcher, mut events) = fetcher_with(mock);

        assert!(matches!(
            fetcher.fetch_models().await,
            Err(FetchError::Models(_))
        ));

        let _refresh = events.recv().await.unwrap();
        let failed = events.recv().await.unwrap();
        assert_eq!(failed.log_level, LogLevel::Warn);
        assert_eq!(failed.outcome, Some(FetchOutcome::ModelsFailed));
    }

    #[tokio::test]
    async fn test_closed_channel_does_not_fail_fetch() {
        let mut mock = MockProxyApi::new();
        mock.expect_get_models().returning(|| Ok(vec![]));
        let (fetcher, events) = fetcher_with(mock);
        drop(events);

        assert!(fetcher.fetch_models().await.unwrap().is_empty());
    }

    #[test]
    fn test_fetch_error_display() {
        let health = FetchError::Health(ProxyError::Http {
            status: 503,
            message: "down".to_string(),
        });
        assert_eq!(
            health.to_string(),
            "Failed to fetch health status: HTTP error with status 503: down"
        );

        let models = FetchError::Models(ProxyError::Http {
            status: 401,
            message: "bad key".to_string(),
        });
        assert_eq!(
            models.to_string(),
            "Failed to fetch models: HTTP error with status 401: bad key"
        );
    }
}
