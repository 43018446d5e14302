//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureMenuEditorCommand, FixturePointsLedgerCommand, MenuEditorCommand, PointsLedgerCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub menu: Arc<dyn MenuEditorCommand>,
    pub points: Arc<dyn PointsLedgerCommand>,
}

impl HttpState {
    /// Construct state from the two panel ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cafe_backend::domain::ports::{FixtureMenuEditorCommand, FixturePointsLedgerCommand};
    /// use cafe_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureMenuEditorCommand),
    ///     Arc::new(FixturePointsLedgerCommand),
    /// );
    /// let _menu = state.menu.clone();
    /// ```
    pub fn new(menu: Arc<dyn MenuEditorCommand>, points: Arc<dyn PointsLedgerCommand>) -> Self {
        Self { menu, points }
    }
}

impl Default for HttpState {
    /// Fixture-backed state with an empty menu and no loyalty profiles.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureMenuEditorCommand),
            Arc::new(FixturePointsLedgerCommand),
        )
    }
}
