//! Centralized error classification for proxy requests

use crate::logging::LogLevel;
use crate::proxy::error::ProxyError;

/// Maps proxy errors to the level they are logged at in the activity log.
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ProxyError) -> LogLevel {
        if let ProxyError::Decode(_) = error {
            // Proxy answered with something other than the expected document
            return LogLevel::Error;
        }
        match error.status() {
            // Rate limiting - the next refresh will try again
            Some(429) => LogLevel::Debug,
            // Authentication errors - the key is wrong or missing
            Some(401 | 403) => LogLevel::Error,
            // Server errors, network issues and anything else are usually temporary
            _ => LogLevel::Warn,
        }
    }
}
