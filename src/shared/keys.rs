//! JSON keys used in Stockfighter requests and responses.

pub const ACCOUNT: &str = "account";
pub const ASKS: &str = "asks";
pub const BIDS: &str = "bids";
pub const DIRECTION: &str = "direction";
pub const ERROR: &str = "error";
pub const FILLS: &str = "fills";
pub const ID: &str = "id";
pub const IS_BUY: &str = "isBuy";
pub const NAME: &str = "name";
pub const OK: &str = "ok";
pub const OPEN: &str = "open";
pub const ORDER_TYPE: &str = "orderType";
pub const ORIGINAL_QTY: &str = "originalQty";
pub const PRICE: &str = "price";
pub const QTY: &str = "qty";
pub const SYMBOL: &str = "symbol";
pub const SYMBOLS: &str = "symbols";
pub const TIMESTAMP: &str = "ts";
pub const TOTAL_FILLED: &str = "totalFilled";
/// Fallback key for the order type when `orderType` is absent.
pub const TYPE: &str = "type";
pub const VENUE: &str = "venue";

/// Reserved key holding array or placeholder payloads in a `ResponseMap`.
pub const RESULTS: &str = "results";
