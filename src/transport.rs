//! The HTTP seam between the aggregator and the network.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// A completed HTTP exchange: the status code and the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only an exact 200 counts as success upstream.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Decode the body as JSON. `url` is only used to label the error.
    pub fn json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Anything that can issue an asynchronous GET.
///
/// Pooling, timeouts and TLS belong to the implementor. The aggregator only
/// ever calls `get`, once per resource.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn get(&self, url: &str) -> Result<Response> {
        let transport_err = |e: reqwest::Error| Error::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };
        let res = reqwest::Client::get(self, url)
            .send()
            .await
            .map_err(transport_err)?;
        let status = res.status().as_u16();
        let body = res.bytes().await.map_err(transport_err)?;
        Ok(Response::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn only_exact_200_is_ok() {
        assert!(Response::new(200, "{}").is_ok());
        assert!(!Response::new(201, "{}").is_ok());
        assert!(!Response::new(204, "").is_ok());
        assert!(!Response::new(404, "Not Found").is_ok());
    }

    #[test]
    fn json_error_names_the_url() {
        let res = Response::new(200, "not json");
        let err = res.json::<Value>("https://example.test/x").unwrap_err();
        assert!(matches!(err, Error::Decode { ref url, .. } if url == "https://example.test/x"));
        assert!(err.to_string().contains("https://example.test/x"));
    }
}
