use crate::consts::cli_consts::{DEFAULT_PROXY_URL, endpoints};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The LLM proxy the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Proxy running on this machine at the default port.
    #[default]
    Local,
    /// Proxy reachable at a user-supplied base URL.
    Custom { proxy_url: String },
}

impl Environment {
    /// Returns the proxy base URL associated with the environment.
    pub fn proxy_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_PROXY_URL.to_string(),
            Environment::Custom { proxy_url } => proxy_url.clone(),
        }
    }

    /// Joins an endpoint path onto the base URL, tolerating slashes on either side.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.proxy_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    pub fn health_url(&self) -> String {
        self.endpoint_url(endpoints::HEALTH)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") || trimmed == DEFAULT_PROXY_URL {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                proxy_url: trimmed.to_string(),
            });
        }
        Err(format!(
            "Invalid proxy URL '{}': expected 'local' or an http(s):// URL",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.proxy_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_aliases() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "http://localhost:5000".parse::<Environment>(),
            Ok(Environment::Local)
        );
    }

    #[test]
    fn test_parse_custom_url() {
        let env: Environment = "https://proxy.example.com".parse().unwrap();
        assert_eq!(env.proxy_url(), "https://proxy.example.com");
        assert_eq!(env.to_string(), "Custom");
    }

    #[test]
    fn test_parse_rejects_non_url() {
        assert!("proxy.example.com".parse::<Environment>().is_err());
    }

    #[test]
    // A trailing slash on the base URL must not produce a double slash.
    fn test_endpoint_urls_trim_slashes() {
        let env: Environment = "http://x/".parse().unwrap();
        assert_eq!(env.health_url(), "http://x/health");
        assert_eq!(env.endpoint_url(endpoints::MODELS), "http://x/models");
        assert_eq!(
            env.endpoint_url(endpoints::CHAT_COMPLETIONS),
            "http://x/v1/chat/completions"
        );
    }

    #[test]
    fn test_local_default_url() {
        assert_eq!(
            Environment::default().health_url(),
            "http://localhost:5000/health"
        );
    }
}
