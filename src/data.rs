use std::fmt;

use anyhow::Context;
use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};

/// A restaurant snapshot, owned by the caller for the duration of one encode.
///
/// Field order is the wire order of the encoded object. Absent strings are
/// written as `""`, never `null`.
///
/// Decoding is lenient the way the Android host layer was: absent nested
/// objects and lists fall back to empty values instead of failing.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[builder(setter(into))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[builder(setter(into))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub rating: f64,
    #[builder(setter(custom), default)]
    #[serde(default, with = "empty_string")]
    pub phone_number: Option<String>,
    #[builder(setter(custom), default)]
    #[serde(default, with = "empty_string")]
    pub website: Option<String>,
    #[builder(default)]
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    #[builder(setter(into), default)]
    #[serde(default, deserialize_with = "skip_null_entries")]
    pub cuisines: Vec<String>,
    #[builder(setter(into), default)]
    #[serde(default, deserialize_with = "null_as_default")]
    pub opening_hours: Vec<OpeningHour>,
    #[builder(setter(into), default)]
    #[serde(default, deserialize_with = "null_as_default")]
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn from_json(payload: &str) -> anyhow::Result<Self> {
        serde_json::from_str(payload).context("fail to decode restaurant payload")
    }

    pub fn from_slice(payload: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(payload).context("fail to decode restaurant payload")
    }
}

impl RestaurantBuilder {
    pub fn phone_number<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.phone_number = Some(non_empty(value.into()));
        self
    }

    pub fn website<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.website = Some(non_empty(value.into()));
        self
    }
}

/// Postal address. Every part is independently optional; use `None`
/// rather than `Some("")` for a missing part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, with = "empty_string")]
    pub street: Option<String>,
    #[serde(default, with = "empty_string")]
    pub city: Option<String>,
    #[serde(default, with = "empty_string")]
    pub state: Option<String>,
    #[serde(default, with = "empty_string")]
    pub zip_code: Option<String>,
    #[serde(default, with = "empty_string")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One opening window. Times are 24-hour `HH:MM` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHour {
    pub day_of_week: DayOfWeek,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub open_time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub close_time: String,
}

impl OpeningHour {
    pub fn new(day_of_week: DayOfWeek, open_time: &str, close_time: &str) -> Self {
        Self {
            day_of_week,
            open_time: open_time.to_string(),
            close_time: close_time.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[builder(setter(into))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[builder(setter(into))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[builder(setter(custom), default)]
    #[serde(default, with = "empty_string")]
    pub description: Option<String>,
    /// Currency amount, no currency code attached.
    pub price: f64,
    #[builder(setter(custom), default)]
    #[serde(default, with = "empty_string")]
    pub category: Option<String>,
}

impl MenuItemBuilder {
    pub fn description<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.description = Some(non_empty(value.into()));
        self
    }

    pub fn category<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.category = Some(non_empty(value.into()));
        self
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|s| !s.is_empty())
}

/// `None` is written as `""`, and `""` or `null` read back as `None`.
mod empty_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn skip_null_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let entries = Option::<Vec<Option<String>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let payload = r#"{
            "id": "rest-123",
            "name": "Sample Diner",
            "rating": 4.5,
            "phoneNumber": "555-1234",
            "website": "www.samplediner.com",
            "address": {"street": "123 Main St", "city": "SomeCity", "state": "CA", "zipCode": "98765", "country": "USA"},
            "cuisines": ["American", "Fast Food"],
            "openingHours": [{"dayOfWeek": "MONDAY", "openTime": "08:00", "closeTime": "20:00"}],
            "menu": [{"id": "menu-1", "name": "Burger", "description": "Tasty beef burger", "price": 5.99, "category": "Main"}]
        }"#;

        let restaurant = Restaurant::from_json(payload).unwrap();
        assert_eq!(restaurant.id, "rest-123");
        assert_eq!(restaurant.phone_number.as_deref(), Some("555-1234"));
        assert_eq!(restaurant.address.zip_code.as_deref(), Some("98765"));
        assert_eq!(restaurant.cuisines, vec!["American", "Fast Food"]);
        assert_eq!(
            restaurant.opening_hours,
            vec![OpeningHour::new(DayOfWeek::Monday, "08:00", "20:00")]
        );
        assert_eq!(restaurant.menu[0].price, 5.99);
    }

    #[test]
    fn test_decode_fills_absent_values() {
        let restaurant = Restaurant::from_json(
            r#"{"id": null, "name": "Cafe", "rating": 3, "phoneNumber": null, "address": null, "menu": null}"#,
        )
        .unwrap();

        assert_eq!(restaurant.id, "");
        assert_eq!(restaurant.rating, 3.0);
        assert_eq!(restaurant.phone_number, None);
        assert_eq!(restaurant.website, None);
        assert_eq!(restaurant.address, Address::default());
        assert!(restaurant.cuisines.is_empty());
        assert!(restaurant.opening_hours.is_empty());
        assert!(restaurant.menu.is_empty());
    }

    #[test]
    fn test_decode_skips_null_cuisines() {
        let restaurant =
            Restaurant::from_json(r#"{"id": "r", "name": "n", "rating": 1.0, "cuisines": ["Thai", null, "Lao"]}"#)
                .unwrap();
        assert_eq!(restaurant.cuisines, vec!["Thai", "Lao"]);
    }

    #[test]
    fn test_decode_empty_optional_is_none() {
        let restaurant = Restaurant::from_json(
            r#"{"id": "r", "name": "n", "rating": 1.0, "website": "", "address": {"city": ""}}"#,
        )
        .unwrap();
        assert_eq!(restaurant.website, None);
        assert_eq!(restaurant.address.city, None);
    }

    #[test]
    fn test_decode_rejects_unknown_weekday() {
        let err = Restaurant::from_json(
            r#"{"id": "r", "name": "n", "rating": 1.0,
                "openingHours": [{"dayOfWeek": "FUNDAY", "openTime": "08:00", "closeTime": "09:00"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("fail to decode restaurant payload"));
    }

    #[test]
    fn test_decode_rejects_text_rating() {
        assert!(Restaurant::from_json(r#"{"id": "r", "name": "n", "rating": "4.5"}"#).is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let restaurant = RestaurantBuilder::default()
            .id("r1")
            .name("Cafe")
            .rating(4.5)
            .build()
            .unwrap();

        assert_eq!(restaurant.phone_number, None);
        assert_eq!(restaurant.address, Address::default());
        assert!(restaurant.menu.is_empty());

        assert!(RestaurantBuilder::default().id("r1").build().is_err());
    }

    #[test]
    fn test_builder_treats_empty_as_absent() {
        let restaurant = RestaurantBuilder::default()
            .id("r1")
            .name("Cafe")
            .rating(4.5)
            .phone_number("")
            .website("cafe.example")
            .build()
            .unwrap();
        assert_eq!(restaurant.phone_number, None);
        assert_eq!(restaurant.website.as_deref(), Some("cafe.example"));

        let item = MenuItemBuilder::default()
            .id("m1")
            .name("Tea")
            .description("")
            .price(2.0)
            .category("")
            .build()
            .unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.category, None);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(DayOfWeek::Wednesday.to_string(), "WEDNESDAY");
        assert_eq!(DayOfWeek::Sunday.as_str(), "SUNDAY");
    }
}
