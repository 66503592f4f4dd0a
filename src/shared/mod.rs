//! Shared enums and wire constants used across all domain modules.
//!
//! Both enums serialize exactly as the server spells them, so they can be used
//! directly in wire types.

pub mod keys;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Direction ───────────────────────────────────────────────────────────────

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

/// How an order interacts with the book.
///
/// - `Limit` rests on the book until filled or cancelled.
/// - `Market` matches anything at any price.
/// - `Fok` (fill-or-kill) fills completely at once or not at all.
/// - `Ioc` (immediate-or-cancel) fills what it can at once and drops the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    #[serde(rename = "Limit", alias = "limit")]
    Limit,
    #[serde(rename = "Market", alias = "market")]
    Market,
    #[serde(rename = "FOK", alias = "fill-or-kill")]
    Fok,
    #[serde(rename = "IOC", alias = "immediate-or-cancel")]
    Ioc,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "Limit",
            Self::Market => "Market",
            Self::Fok => "FOK",
            Self::Ioc => "IOC",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Limit" | "limit" => Ok(Self::Limit),
            "Market" | "market" => Ok(Self::Market),
            "FOK" | "fill-or-kill" => Ok(Self::Fok),
            "IOC" | "immediate-or-cancel" => Ok(Self::Ioc),
            other => Err(format!("unknown order type: {other}")),
        }
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Parse an RFC 3339 `ts` value. Absent or unparseable input gives `None`.
pub fn parse_timestamp(ts: Option<&str>) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(ts?).ok()?;
    Some(parsed.with_timezone(&Utc))
}
