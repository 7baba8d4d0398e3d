//! Client configuration.
//!
//! Read from the environment:
//! - `LIVRARIA_API_URL` (default `http://localhost:8080`)
//! - `LIVRARIA_AUTH_TOKEN` (optional bearer token)
//! - `LIVRARIA_USER_ID` (optional acting operator, numeric)
//! - `LIVRARIA_HTTP_TIMEOUT_SECS` (optional request timeout)

use std::time::Duration;

use livraria_core::UserId;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub auth_token: Option<String>,
    pub user_id: Option<UserId>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
            user_id: None,
            timeout: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unreadable optional values are
    /// ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("LIVRARIA_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(api_url);

        config.auth_token = lookup("LIVRARIA_AUTH_TOKEN").filter(|t| !t.is_empty());

        if let Some(raw) = lookup("LIVRARIA_USER_ID") {
            match raw.parse::<UserId>() {
                Ok(id) => config.user_id = Some(id),
                Err(e) => tracing::warn!(value = %raw, error = %e, "ignoring LIVRARIA_USER_ID"),
            }
        }

        if let Some(raw) = lookup("LIVRARIA_HTTP_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!(value = %raw, "ignoring LIVRARIA_HTTP_TIMEOUT_SECS"),
            }
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn reads_all_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("LIVRARIA_API_URL", "https://estoque.example/api/"),
            ("LIVRARIA_AUTH_TOKEN", "tok"),
            ("LIVRARIA_USER_ID", "12"),
            ("LIVRARIA_HTTP_TIMEOUT_SECS", "30"),
        ]));
        assert_eq!(config.api_url, "https://estoque.example/api");
        assert_eq!(config.auth_token.as_deref(), Some("tok"));
        assert_eq!(config.user_id, Some(UserId::new(12)));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn bad_optional_values_are_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("LIVRARIA_USER_ID", "ana"),
            ("LIVRARIA_HTTP_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config.user_id, None);
        assert_eq!(config.timeout, None);
    }
}
