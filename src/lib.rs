//! # Stockfighter SDK
//!
//! A typed Rust client for the Stockfighter trading-simulation REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Request descriptors, URL joining, the tolerant response mapper
//!    and typed response records (no I/O)
//! 2. **HTTP**: `Executor`, a single-attempt reqwest dispatcher
//! 3. **Client**: `StockfighterClient`, which runs descriptor → transaction →
//!    executor → mapper and splits success from failure on the `ok` flag
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockfighter_sdk::prelude::*;
//!
//! let config = Config::builder().api_key("...").venue("TESTEX").build()?;
//! let client = StockfighterClient::new(config)?;
//!
//! let venue = client.heartbeat().venue().await?;
//! let book = client.orderbooks().get().await?;
//! let order = client
//!     .orders()
//!     .place(Decimal::new(5025, 2), 100, Direction::Buy, OrderType::Limit)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Wire keys and enums shared across domains.
pub mod shared;

/// Domain modules (vertical slices): descriptors, records, conversions.
pub mod domain;

/// Descriptor traits and HTTP verbs.
pub mod request;

/// Verb + URL of a single call.
pub mod transaction;

/// Tolerant JSON → keyed structure mapping.
pub mod response;

/// Unified SDK error types.
pub mod error;

/// Process-wide settings.
pub mod config;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Client ──────────────────────────────────────────────────────────

/// `StockfighterClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{Direction, OrderType};

    // Descriptors
    pub use crate::domain::heartbeat::{ApiHeartbeat, VenueHeartbeat};
    pub use crate::domain::order::{CancelOrder, PlaceOrder, QueryOrder};
    pub use crate::domain::orderbook::FetchOrderBook;
    pub use crate::domain::stock::StocksOnVenue;
    pub use crate::request::{Descriptor, Method, Request};

    // Records
    pub use crate::domain::heartbeat::{ApiStatus, VenueStatus};
    pub use crate::domain::order::{Fill, Order};
    pub use crate::domain::orderbook::{BookLevel, OrderBook};
    pub use crate::domain::stock::{Stock, StockList};
    pub use crate::response::{FromResponse, ResponseMap};

    // Pipeline
    pub use crate::transaction::{join_url, Transaction};

    // Config, errors, network
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{HttpError, SdkError};
    pub use crate::network::{AUTH_HEADER, DEFAULT_API_URL};

    pub use rust_decimal::Decimal;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        HeartbeatClient, OrderbooksClient, OrdersClient, StockfighterClient, StocksClient,
        DROPPED_MESSAGE,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{Executor, RawResponse};
}
