//! Defines the trait for anything that can be polled for block records, and
//! the http implementation that talks to the collaborator.

use dioxus_logger::tracing::debug;
use reqwest::StatusCode;
use reqwest::Url;
use serde_json::Value;

use crate::block_record::BlockRecord;
use crate::prefs::feed_config::ColumnMode;
use crate::prefs::feed_config::FeedConfig;

/// Why a single poll produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid collaborator url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("collaborator answered {0}")]
    Status(StatusCode),

    #[error("response body is not json: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// A trait for any service that can be polled for the latest block records.
pub trait FeedSource {
    /// Performs one poll. A response may carry several records (dynamic
    /// columns) or exactly one (fixed columns).
    async fn fetch(&self) -> Result<Vec<BlockRecord>, FetchError>;
}

/// Polls the collaborator with a bare `GET`.
#[derive(Clone, Debug)]
pub struct HttpFeedSource {
    client: reqwest::Client,
    url: String,
    columns: ColumnMode,
    rows_key: String,
}

impl HttpFeedSource {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.url.clone(),
            columns: config.columns,
            rows_key: config.rows_key.clone(),
        }
    }

    fn parsed_url(&self) -> Result<Url, FetchError> {
        let trimmed = self.url.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidUrl {
                url: self.url.clone(),
                reason: "url is blank".to_string(),
            });
        }
        Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Vec<BlockRecord>, FetchError> {
        let url = self.parsed_url()?;
        debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await?;
        debug!("collaborator answered {} bytes", body.len());
        decode_records(&body, self.columns, &self.rows_key)
    }
}

/// Turns a response body into records.
///
/// Fixed columns expect one JSON object. Dynamic columns expect an object with
/// an array of objects under `rows_key`.
pub fn decode_records(
    body: &str,
    columns: ColumnMode,
    rows_key: &str,
) -> Result<Vec<BlockRecord>, FetchError> {
    let json: Value = serde_json::from_str(body).map_err(FetchError::Decode)?;

    match columns {
        ColumnMode::Fixed => Ok(vec![record_from(json)?]),
        ColumnMode::DynamicFromKeys => {
            let Value::Object(mut object) = json else {
                return Err(FetchError::Shape(format!("expected an object, got {json}")));
            };
            match object.remove(rows_key) {
                Some(Value::Array(rows)) => rows.into_iter().map(record_from).collect(),
                Some(other) => Err(FetchError::Shape(format!(
                    "`{rows_key}` should be an array, got {other}"
                ))),
                None => Err(FetchError::Shape(format!("missing `{rows_key}` array"))),
            }
        }
    }
}

fn record_from(json: Value) -> Result<BlockRecord, FetchError> {
    if !json.is_object() {
        return Err(FetchError::Shape(format!("expected an object, got {json}")));
    }
    serde_json::from_value(json).map_err(|e| FetchError::Shape(e.to_string()))
}
