//! High-level client: `StockfighterClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This module
//! wires descriptor → transaction → executor → mapper and applies the `ok`
//! check that separates success from failure.

use crate::config::Config;
use crate::domain::heartbeat::client::Heartbeat;
use crate::domain::order::client::Orders;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::stock::client::Stocks;
use crate::error::SdkError;
use crate::http::Executor;
use crate::request::{Descriptor, Request};
use crate::response::ResponseMap;
use crate::transaction::Transaction;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

// Re-export sub-client types for convenience.
pub use crate::domain::heartbeat::client::Heartbeat as HeartbeatClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::stock::client::Stocks as StocksClient;

/// The primary entry point for the Stockfighter SDK.
///
/// Holds no state that changes between calls, so concurrent calls never
/// interfere. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct StockfighterClient {
    executor: Executor,
    config: Config,
}

impl StockfighterClient {
    pub fn new(config: Config) -> Result<Self, SdkError> {
        Ok(Self {
            executor: Executor::new(config.api_key())?,
            config,
        })
    }

    /// Client configured from `STOCKFIGHTER_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn heartbeat(&self) -> Heartbeat<'_> {
        Heartbeat { client: self }
    }

    pub fn stocks(&self) -> Stocks<'_> {
        Stocks { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_> {
        Orderbooks { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Pipeline ─────────────────────────────────────────────────────────

    /// Run one call and return the decoded body if the server flagged it `ok`.
    ///
    /// Transport failures return [`SdkError::Http`] without touching the
    /// decoder. A decoded body whose `ok` is missing or false returns
    /// [`SdkError::Rejected`] carrying the whole body.
    pub async fn send(&self, descriptor: &dyn Descriptor) -> Result<ResponseMap, SdkError> {
        let transaction = Transaction::for_descriptor(self.config.base_url(), descriptor);
        let raw = self.executor.execute(&transaction).await?;
        let map = ResponseMap::from_bytes(&raw.body);

        if map.is_ok() {
            return Ok(map);
        }

        tracing::debug!(status = raw.status, url = %transaction.full_url(), "Response not ok");
        Err(SdkError::Rejected {
            body: map.to_string(),
        })
    }

    /// [`send`](Self::send), then build the request's typed response record.
    pub async fn call<R: Request>(&self, request: &R) -> Result<R::Response, SdkError> {
        Ok(self.send(request).await?.parse())
    }

    /// Fire-and-forget form of [`send`](Self::send).
    ///
    /// Exactly one of `on_success` and `on_failure` runs, once, on a Tokio
    /// worker. The failure callback receives the error's diagnostic message.
    /// If the task is dropped before the call completes (runtime shutdown or
    /// [`JoinHandle::abort`]), `on_failure` runs from the drop with
    /// [`DROPPED_MESSAGE`]. Dropping the handle itself does not cancel the
    /// call.
    ///
    /// Outside a Tokio runtime there is nothing to spawn on, so `on_failure`
    /// runs synchronously on the calling thread before `send_with` returns
    /// `None`. This is the only case where a callback is not deferred.
    pub fn send_with<D, S, F>(
        &self,
        descriptor: D,
        on_success: S,
        on_failure: F,
    ) -> Option<JoinHandle<()>>
    where
        D: Descriptor + 'static,
        S: FnOnce(ResponseMap) + Send + 'static,
        F: FnOnce(String) + Send + 'static,
    {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                on_failure(format!("Error: {e}"));
                return None;
            }
        };

        // Must exist before the first poll: an unpolled task still reports.
        let guard = FailureGuard::new(on_failure);
        let client = self.clone();
        Some(handle.spawn(async move {
            let mut guard = guard;
            let outcome = client.send(&descriptor).await;
            let Some(on_failure) = guard.disarm() else {
                return;
            };
            match outcome {
                Ok(map) => on_success(map),
                Err(e) => on_failure(e.to_string()),
            }
        }))
    }
}

/// Message passed to `on_failure` when a [`StockfighterClient::send_with`]
/// task is dropped before its call completes.
pub const DROPPED_MESSAGE: &str = "Error: call dropped before completion";

/// Holds the failure callback until the call settles. Fires it on drop if it
/// was never taken.
struct FailureGuard<F: FnOnce(String)> {
    on_failure: Option<F>,
}

impl<F: FnOnce(String)> FailureGuard<F> {
    fn new(on_failure: F) -> Self {
        Self {
            on_failure: Some(on_failure),
        }
    }

    fn disarm(&mut self) -> Option<F> {
        self.on_failure.take()
    }
}

impl<F: FnOnce(String)> Drop for FailureGuard<F> {
    fn drop(&mut self) {
        if let Some(on_failure) = self.on_failure.take() {
            tracing::debug!("send_with task dropped before completion");
            on_failure(DROPPED_MESSAGE.to_string());
        }
    }
}
