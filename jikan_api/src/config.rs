//! Client configuration: base URL, timeout and default headers.

use std::time::Duration;

/// Production Jikan v4 origin.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Bound applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings read by the client at construction time.
///
/// Built with the `with_*` methods and handed to
/// [`Client::with_config`](crate::Client::with_config); the client never
/// mutates it afterwards.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }
}

impl ClientConfig {
    /// Points the client at another origin. Paths are appended verbatim, so
    /// the value should not end with a slash. An empty value restores
    /// [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            base_url.to_string()
        };
        self
    }

    /// A zero duration restores [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        self
    }

    /// Adds a header sent with every request. A header with the same name
    /// (compared case-insensitively) is replaced in place.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => *entry = (name.to_string(), value.to_string()),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Adds every header in `headers`, in order, with [`Self::with_header`].
    pub fn with_headers<'a, I>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        headers
            .into_iter()
            .fold(self, |config, (name, value)| config.with_header(name, value))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "https://api.jikan.moe/v4");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.headers(),
            &[("Accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn caller_headers_extend_defaults() {
        let config = ClientConfig::default().with_header("X-Custom-Header", "value");
        assert_eq!(config.headers().len(), 2);
        assert_eq!(config.headers()[1].0, "X-Custom-Header");
    }

    #[test]
    fn caller_headers_override_defaults_case_insensitively() {
        let config = ClientConfig::default().with_header("accept", "text/plain");
        assert_eq!(
            config.headers(),
            &[("accept".to_string(), "text/plain".to_string())]
        );
    }

    #[test]
    fn with_headers_applies_in_order() {
        let config = ClientConfig::default()
            .with_headers([("X-A", "1"), ("X-B", "2"), ("x-a", "3")])
            .with_timeout(Duration::from_secs(5))
            .with_base_url("https://custom-api.example.com");
        assert_eq!(
            config.headers(),
            &[
                ("Accept".to_string(), "application/json".to_string()),
                ("x-a".to_string(), "3".to_string()),
                ("X-B".to_string(), "2".to_string()),
            ]
        );
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.base_url(), "https://custom-api.example.com");
    }

    #[test]
    fn empty_overrides_fall_back_to_defaults() {
        let config = ClientConfig::default()
            .with_base_url("https://custom-api.example.com")
            .with_timeout(Duration::from_secs(5))
            .with_base_url("")
            .with_timeout(Duration::ZERO);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }
}
