//! Low-level executor: sends one [`Transaction`] and returns the raw result.
//!
//! GET and DELETE go out without a body. POST takes its body from the
//! transaction's descriptor. There are no retries and no timeout beyond what
//! reqwest applies by default. HTTP status is recorded, never interpreted.

use crate::error::{HttpError, SdkError};
use crate::network::AUTH_HEADER;
use crate::transaction::Transaction;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;

/// Whatever the server sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Dispatches transactions with the API key attached to every request.
#[derive(Clone)]
pub struct Executor {
    client: Client,
    api_key: HeaderValue,
}

impl Executor {
    pub fn new(api_key: &str) -> Result<Self, SdkError> {
        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|e| HttpError::InvalidHeader(format!("{AUTH_HEADER}: {e}")))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(HttpError::from)?;

        Ok(Self { client, api_key })
    }

    /// Send `transaction` once.
    ///
    /// A connection, TLS or DNS failure, or a body that cannot be read, comes
    /// back as [`SdkError::Http`]. Any response that arrives, whatever its
    /// status, comes back as a [`RawResponse`].
    pub async fn execute(&self, transaction: &Transaction<'_>) -> Result<RawResponse, SdkError> {
        let method = transaction.method();
        let url = transaction.full_url();

        let mut req = self
            .client
            .request(method.into(), &url)
            .header(AUTH_HEADER, self.api_key.clone());

        if method.carries_body() {
            if let Some(descriptor) = transaction.descriptor() {
                if let Some(body) = descriptor.body()? {
                    req = req
                        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                        .body(body);
                }
            }
        }

        tracing::debug!(method = %method, url = %url, "Dispatching request");

        let resp = req.send().await.map_err(HttpError::from)?;
        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = resp.bytes().await.map_err(HttpError::from)?.to_vec();

        tracing::debug!(status, len = body.len(), url = %url, "Received response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}
