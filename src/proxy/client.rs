//! LLM Proxy Client
//!
//! An authenticated HTTP client for the proxy's health and model endpoints.

use crate::consts::cli_consts::{endpoints, network};
use crate::environment::Environment;
use crate::proxy::ProxyApi;
use crate::proxy::error::ProxyError;
use crate::proxy::types::{HealthStatus, ModelDescriptor, ModelList};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("llm-proxy-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    environment: Environment,
    api_key: Option<String>,
}

impl ProxyClient {
    pub fn new(environment: Environment, api_key: Option<String>) -> Result<Self, ProxyError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
            api_key,
        })
    }

    /// An absent key still sends the header, with an empty token.
    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key.as_deref().unwrap_or_default())
    }

    fn authorized_get(&self, endpoint: &str) -> RequestBuilder {
        self.client
            .get(self.environment.endpoint_url(endpoint))
            .header("Authorization", self.bearer())
            .header("User-Agent", USER_AGENT)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ProxyError> {
        if !response.status().is_success() {
            return Err(ProxyError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ProxyError> {
        let response = self.authorized_get(endpoint).send().await?;
        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl ProxyApi for ProxyClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_health(&self) -> Result<HealthStatus, ProxyError> {
        self.get_request::<serde_json::Value>(endpoints::HEALTH)
            .await
            .map(HealthStatus::new)
    }

    async fn get_models(&self) -> Result<Vec<ModelDescriptor>, ProxyError> {
        let list: ModelList = self.get_request(endpoints::MODELS).await?;
        Ok(list.into_models())
    }

    async fn probe(&self, endpoint: &str) -> Result<u16, ProxyError> {
        let response = self.authorized_get(endpoint).send().await?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: Option<&str>) -> ProxyClient {
        let environment = Environment::Custom {
            proxy_url: server.uri(),
        };
        ProxyClient::new(environment, api_key.map(str::to_string)).unwrap()
    }

    #[tokio::test]
    /// Should send the bearer token and return the whole health document.
    async fn test_get_health_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "healthy_endpoints": ["a"],
                "unhealthy_endpoints": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let status = client_for(&server, Some("sk-test"))
            .get_health()
            .await
            .unwrap();
        assert!(status.has_healthy_endpoints());
        assert_eq!(status.as_json()["unhealthy_endpoints"], json!([]));
    }

    #[tokio::test]
    /// A missing key still sends the Authorization header. The trailing space of the
    /// empty token does not survive on the wire.
    async fn test_missing_key_sends_empty_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .and(header("Authorization", "Bearer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let status = client_for(&server, None).get_health().await.unwrap();
        assert!(!status.has_healthy_endpoints());
    }

    #[tokio::test]
    /// A base URL ending in a slash must still hit `/health`.
    async fn test_trailing_slash_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "healthy_endpoints": ["a"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let environment = Environment::Custom {
            proxy_url: format!("{}/", server.uri()),
        };
        let client = ProxyClient::new(environment, None).unwrap();
        assert!(client.get_health().await.unwrap().has_healthy_endpoints());
    }

    #[tokio::test]
    /// Should return models in server order.
    async fn test_get_models_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": [
                    {"id": "gpt-4", "object": "model", "created": 1700000000, "owned_by": "openai"},
                    {"id": "claude", "object": "model", "created": 1700000001, "owned_by": "anthropic"}
                ]
            })))
            .mount(&server)
            .await;

        let models = client_for(&server, None).get_models().await.unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "gpt-4");
        assert_eq!(models[0].owned_by, "openai");
        assert_eq!(models[0].created, 1700000000);
        assert_eq!(models[1].id, "claude");
    }

    #[tokio::test]
    async fn test_get_models_without_data_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "list"})))
            .mount(&server)
            .await;

        let models = client_for(&server, None).get_models().await.unwrap();
        assert!(models.is_empty());
    }

    #[tokio::test]
    /// Non-2xx statuses become `ProxyError::Http` with the body as message.
    async fn test_non_success_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("wrong"))
            .get_models()
            .await
            .unwrap_err();
        match err {
            ProxyError::Http { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, None).get_health().await.unwrap_err();
        assert!(matches!(err, ProxyError::Decode(_)));
    }

    #[tokio::test]
    /// Probing reports the status code instead of failing on non-2xx.
    async fn test_probe_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health/readiness"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let status = client_for(&server, None)
            .probe("/health/readiness")
            .await
            .unwrap();
        assert_eq!(status, 503);
    }

    #[tokio::test]
    async fn test_connection_refused_is_reqwest_error() {
        let environment = Environment::Custom {
            proxy_url: "http://127.0.0.1:1".to_string(),
        };
        let client = ProxyClient::new(environment, None).unwrap();
        let err = client.get_health().await.unwrap_err();
        assert!(matches!(err, ProxyError::Reqwest(_)));
        assert_eq!(err.status(), None);
    }
}
