//! Hosted store outbound adapters.
//!
//! Thin reqwest implementations of the menu item and profile repository
//! ports, speaking the store's PostgREST dialect.

mod client;
mod dto;
mod menu_items;
mod profiles;

pub use client::{StoreClient, StoreClientError, StoreConfig};
pub use menu_items::StoreMenuItemRepository;
pub use profiles::StoreProfileRepository;

/// PostgREST equality filter value, e.g. `eq.042`.
fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}
