//! Request execution shared by every endpoint facade.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use crate::{
    config::ClientConfig,
    query::{Query, QueryParams},
    Error,
};

/// Immutable request context: configuration plus one pooled HTTP client.
#[derive(Debug)]
pub(crate) struct Transport {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url<Q: Query + ?Sized>(&self, path: &str, query: &Q) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.config.base_url(), path).as_str()).map_err(|e| {
            tracing::warn!("Invalid URL constructed for {}: {}", path, e);
            Error::transport(format!("Invalid URL: {}", e))
        })?;
        Ok(query.add_to_url(&url))
    }

    fn header_map(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.config.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                tracing::warn!("Invalid header name {:?}: {}", name, e);
                Error::transport(format!("Invalid header name {}: {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                tracing::warn!("Invalid value for header {}: {}", name, e);
                Error::transport(format!("Invalid header value for {}: {}", name, e))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Performs one GET of `base_url + path` with `query` appended and decodes
    /// the 2xx body into `T`.
    ///
    /// The configured timeout bounds the whole exchange, body included. When
    /// it elapses the in-flight request is dropped and [`Error::Timeout`] is
    /// returned.
    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        let url = self.get_url(path, query)?;
        let headers = self.header_map()?;
        tracing::debug!("GET {}", url);

        let (status, body) =
            match tokio::time::timeout(self.config.timeout(), self.fetch(url.clone(), headers))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    tracing::warn!(
                        "Request to {} timed out after {:?}",
                        url,
                        self.config.timeout()
                    );
                    return Err(Error::Timeout);
                }
            };

        if !status.is_success() {
            tracing::warn!("Request to {} failed with status {}", url, status);
            let data = body
                .ok()
                .and_then(|body| serde_json::from_str::<Value>(&body).ok())
                .unwrap_or_else(|| Value::Object(Map::new()));
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                data,
            });
        }

        let body = body.map_err(network_fault)?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::warn!("Failed to decode response from {}: {}", url, e);
            Error::Decode {
                message: e.to_string(),
            }
        })
    }

    /// [`get`](Self::get) without query parameters.
    pub(crate) async fn get_path<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.get(path, &QueryParams::new()).await
    }

    /// Sends the request and reads the body. A failed body read is returned
    /// alongside the status so error responses keep their status code.
    async fn fetch(
        &self,
        url: Url,
        headers: HeaderMap,
    ) -> Result<(StatusCode, Result<String, reqwest::Error>), Error> {
        let resp = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(network_fault)?;
        let status = resp.status();
        Ok((status, resp.text().await))
    }
}

fn network_fault(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        tracing::warn!("Request timed out: {}", e);
        return Error::Timeout;
    }
    tracing::warn!("Request failed: {}", e);
    Error::transport(e.to_string())
}
