//! Driving port for the points panel.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Error, PROFILE_NOT_FOUND_MESSAGE, Points, ShortCode};

/// Outcome of a stored point adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsReceipt {
    /// Counter value now held by the store.
    pub points: Points,
    /// Confirmation for the operator, e.g. `"Dodano punkt. Nowy stan: 4"`.
    pub message: String,
    /// The client should empty its code input.
    pub clear_code: bool,
}

/// Adds or removes one loyalty point for the profile behind a short code.
///
/// Implementations run one adjustment at a time and reject overlapping calls
/// with [`crate::domain::ErrorCode::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsLedgerCommand: Send + Sync {
    /// Add one point. `raw_code` is the text exactly as typed.
    async fn add_point(&self, raw_code: String) -> Result<PointsReceipt, Error>;

    /// Remove one point, never going below zero.
    async fn remove_point(&self, raw_code: String) -> Result<PointsReceipt, Error>;
}

/// Fixture ledger in which no code matches a profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePointsLedgerCommand;

impl FixturePointsLedgerCommand {
    fn lookup(raw_code: &str) -> Result<PointsReceipt, Error> {
        ShortCode::parse(raw_code).map_err(|err| Error::invalid_request(err.to_string()))?;
        Err(Error::not_found(PROFILE_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl PointsLedgerCommand for FixturePointsLedgerCommand {
    async fn add_point(&self, raw_code: String) -> Result<PointsReceipt, Error> {
        Self::lookup(&raw_code)
    }

    async fn remove_point(&self, raw_code: String) -> Result<PointsReceipt, Error> {
        Self::lookup(&raw_code)
    }
}
