use crate::environment::Environment;
use crate::proxy::error::ProxyError;
use crate::proxy::types::{HealthStatus, ModelDescriptor};

pub(crate) mod client;
pub use client::ProxyClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ProxyApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the proxy's health document.
    async fn get_health(&self) -> Result<HealthStatus, ProxyError>;

    /// Fetch the models currently served by the proxy, in server order.
    async fn get_models(&self) -> Result<Vec<ModelDescriptor>, ProxyError>;

    /// Issue a GET against an arbitrary endpoint and report the status code.
    ///
    /// Non-success statuses are returned as `Ok`; only transport failures are errors.
    async fn probe(&self, endpoint: &str) -> Result<u16, ProxyError>;
}
