//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Typed response records
//! - `request.rs`: Request descriptors for the slice's endpoints
//! - `convert.rs`: `FromResponse` construction from a `ResponseMap`
//! - `client.rs`: Sub-client with HTTP methods

pub mod heartbeat;
pub mod order;
pub mod orderbook;
pub mod stock;
