//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **store**: reqwest client for the hosted relational store that owns the
//!   `menu_items` and `profiles` collections.
//!
//! Adapters translate between domain types and wire representations. They
//! contain no business logic.

pub mod store;
