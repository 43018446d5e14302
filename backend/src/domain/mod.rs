//! Domain primitives, use-cases and ports.
//!
//! Purpose: hold the café's menu and loyalty rules free of transport and
//! storage concerns. Inbound adapters call the driving ports in [`ports`];
//! outbound adapters implement the repository ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Menu types: Category, Price, MenuItem, DraftBuffer, MenuEditor,
//!   AddItemForm.
//! - Loyalty types: ShortCode, Points, Profile.
//! - Services: MenuEditorService, PointsLedgerService.
//! - SingleFlight: non-queueing busy guard.

pub mod error;
mod input;
pub mod loyalty;
pub mod menu;
mod menu_editor_service;
mod points_ledger_service;
pub mod ports;
mod single_flight;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::loyalty::{
    PROFILE_NOT_FOUND_MESSAGE, PointAdjustment, Points, Profile, ProfileId, ShortCode,
    ShortCodeError,
};
pub use self::menu::{
    AddItemError, AddItemForm, Category, DraftBuffer, MenuEditor, MenuItem, MenuItemId,
    MenuItemPatch, NewMenuItem, ParseCategoryError, Price, next_order_index,
};
pub use self::menu_editor_service::MenuEditorService;
pub use self::points_ledger_service::PointsLedgerService;
pub use self::single_flight::{FlightPermit, SingleFlight};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use cafe_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u64> {
///     Err(Error::not_found("Nie znaleziono profilu"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
