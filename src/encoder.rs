use crate::data::Restaurant;
use crate::json::{self, Escaping};

/// Flattens a [`Restaurant`] into one compact JSON object.
///
/// Key order is part of the wire contract:
/// `id, name, rating, phoneNumber, website, address, cuisines, openingHours, menu`.
/// No key is ever dropped; absent strings become `""` and empty lists `[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestaurantJsonEncoder {
    escaping: Escaping,
}

impl RestaurantJsonEncoder {
    pub fn new(escaping: Escaping) -> Self {
        Self { escaping }
    }

    pub fn escaping(&self) -> Escaping {
        self.escaping
    }

    pub fn encode(&self, restaurant: &Restaurant) -> String {
        // only strings, finite-or-null numbers and sequences: cannot fail
        let json = json::to_string(restaurant, self.escaping)
            .expect("restaurant serialization is infallible");

        tracing::debug!(
            restaurant = %restaurant.id,
            bytes = json.len(),
            escaping = ?self.escaping,
            "encoded restaurant"
        );
        json
    }
}

/// Encodes with the default (escaping) encoder.
pub fn encode(restaurant: &Restaurant) -> String {
    RestaurantJsonEncoder::default().encode(restaurant)
}
