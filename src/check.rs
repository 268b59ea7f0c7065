//! One-shot connectivity check against the proxy.
//!
//! Probes `/health` first. If that fails there is no point in going further, so the
//! check stops with troubleshooting tips. Otherwise the liveliness, readiness and
//! models endpoints are probed concurrently.

use crate::consts::cli_consts::endpoints;
use crate::proxy::ProxyApi;
use crate::proxy::error::ProxyError;
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use futures::future::join_all;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Proxy health check failed at {url}: {reason}")]
    HealthUnreachable { url: String, reason: String },

    #[error("Proxy health check returned status {status} at {url}")]
    HealthStatus { url: String, status: u16 },
}

/// Result of probing a single endpoint
#[derive(Debug)]
pub struct ProbeResult {
    pub endpoint: &'static str,
    pub outcome: Result<u16, ProxyError>,
}

impl ProbeResult {
    /// 2xx counts as passing
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Ok(status) if (200..300).contains(&status))
    }
}

/// Endpoints probed once `/health` has answered
const FOLLOW_UP_ENDPOINTS: [&str; 3] = [
    endpoints::HEALTH_LIVELINESS,
    endpoints::HEALTH_READINESS,
    endpoints::MODELS,
];

async fn probe(proxy: &dyn ProxyApi, endpoint: &'static str) -> ProbeResult {
    ProbeResult {
        endpoint,
        outcome: proxy.probe(endpoint).await,
    }
}

fn report(proxy: &dyn ProxyApi, result: &ProbeResult) {
    let url = proxy.environment().endpoint_url(result.endpoint);
    match &result.outcome {
        Ok(status) if result.passed() => {
            print_cmd_success!(result.endpoint, "{} -> {}", url, status)
        }
        Ok(status) => print_cmd_warn!(result.endpoint, "{} -> {}", url, status),
        Err(e) => print_cmd_warn!(result.endpoint, "{} -> {}", url, e),
    }
}

fn print_troubleshooting() {
    print_cmd_info!("Troubleshooting", "");
    println!("  1. Is the proxy running? Check the container or process logs.");
    println!("  2. Is the URL correct? Pass --api-url or set LITELLM_API_URL.");
    println!("  3. Does the proxy require a key? Pass --api-key or set LITELLM_API_KEY.");
    println!("  4. Is a firewall blocking the port?");
}

/// Run the check. Fails only if `/health` does not answer with 2xx.
pub async fn run_check(proxy: &dyn ProxyApi) -> Result<Vec<ProbeResult>, CheckError> {
    let health_url = proxy.environment().health_url();
    print_cmd_info!("Checking proxy", "{}", proxy.environment().proxy_url());

    let health = probe(proxy, endpoints::HEALTH).await;
    report(proxy, &health);
    let failure = match &health.outcome {
        Err(e) => Some(CheckError::HealthUnreachable {
            url: health_url,
            reason: e.to_string(),
        }),
        Ok(status) if !health.passed() => Some(CheckError::HealthStatus {
            url: health_url,
            status: *status,
        }),
        Ok(_) => None,
    };
    if let Some(failure) = failure {
        print_cmd_error!("Proxy health check failed");
        print_troubleshooting();
        return Err(failure);
    }

    let follow_ups = join_all(
        FOLLOW_UP_ENDPOINTS
            .into_iter()
            .map(|endpoint| probe(proxy, endpoint)),
    )
    .await;
    for result in &follow_ups {
        report(proxy, result);
    }

    let passed = follow_ups.iter().filter(|r| r.passed()).count() + 1;
    print_cmd_success!(
        "Check complete",
        "{}/{} endpoints passed",
        passed,
        follow_ups.len() + 1
    );

    let mut results = Vec::with_capacity(follow_ups.len() + 1);
    results.push(health);
    results.extend(follow_ups);
    Ok(results)
}
