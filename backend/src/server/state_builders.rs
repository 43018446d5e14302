//! Builders wiring the store adapters into the HTTP state ports.

use std::sync::Arc;

use cafe_backend::domain::{MenuEditorService, PointsLedgerService};
use cafe_backend::inbound::http::state::HttpState;
use cafe_backend::outbound::store::{
    StoreClient, StoreMenuItemRepository, StoreProfileRepository,
};

/// Build handler state backed by the hosted store.
///
/// Both services share one reqwest connection pool through `store`.
pub(super) fn build_http_state(store: &StoreClient) -> HttpState {
    let menu_repo = Arc::new(StoreMenuItemRepository::new(store.clone()));
    let profile_repo = Arc::new(StoreProfileRepository::new(store.clone()));
    HttpState::new(
        Arc::new(MenuEditorService::new(menu_repo)),
        Arc::new(PointsLedgerService::new(profile_repo)),
    )
}
