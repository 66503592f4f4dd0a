//! Conversions: ResponseMap → heartbeat records.

use super::{ApiStatus, VenueStatus};
use crate::response::{FromResponse, ResponseMap};
use crate::shared::keys;

impl FromResponse for ApiStatus {
    fn from_response(map: &ResponseMap) -> Self {
        ApiStatus {
            ok: map.bool(keys::OK),
            error: map.string(keys::ERROR),
        }
    }
}

impl FromResponse for VenueStatus {
    fn from_response(map: &ResponseMap) -> Self {
        VenueStatus {
            ok: map.bool(keys::OK),
            venue: map.string(keys::VENUE),
        }
    }
}
