//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by the store adapter. Driving
//! ports (`*Command`) are implemented by the domain services and consumed by
//! the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod menu_editor_command;
mod menu_item_repository;
mod points_ledger_command;
mod profile_repository;

#[cfg(test)]
pub use menu_editor_command::MockMenuEditorCommand;
pub use menu_editor_command::{
    AddItemOutcome, Confirmation, FixtureMenuEditorCommand, MenuEditorCommand, MenuEntry,
    MenuListing,
};
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
pub use menu_item_repository::{MenuItemRepository, MenuItemRepositoryError};
#[cfg(test)]
pub use points_ledger_command::MockPointsLedgerCommand;
pub use points_ledger_command::{FixturePointsLedgerCommand, PointsLedgerCommand, PointsReceipt};
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
