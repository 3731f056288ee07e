//! Native restaurant model and its canonical JSON encoding.
//!
//! The host application hands over plain restaurant values (built in Rust or
//! decoded from a JSON transfer object) and gets back one compact JSON string.

pub mod config;
pub mod data;
pub mod encoder;
pub mod json;

#[cfg(target_os = "android")]
pub mod jni_bridge;

pub use data::{Address, DayOfWeek, MenuItem, OpeningHour, Restaurant};
pub use encoder::{encode, RestaurantJsonEncoder};
pub use json::Escaping;
