/// Errors that stop a fetch before any outcome can be classified.
///
/// A non-200 status is not an error: it is reported through
/// [`crate::fetch::FetchOutcome`]. These variants cover the cases where the
/// request itself failed or a 200 body could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
