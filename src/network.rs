//! Network constants for the Stockfighter API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.stockfighter.io/ob/api";

/// Header carrying the API key on every request.
pub const AUTH_HEADER: &str = "X-Starfighter-Authorization";

/// The always-on test exchange.
pub const DEFAULT_VENUE: &str = "TESTEX";

/// The stock listed on the test exchange.
pub const DEFAULT_SYMBOL: &str = "FOOBAR";

/// The account accepted by the test exchange.
pub const DEFAULT_ACCOUNT: &str = "EXB123456";
