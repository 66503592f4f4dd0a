//! HTTP layer: single-attempt reqwest dispatcher.

pub mod executor;

pub use executor::{Executor, RawResponse};
