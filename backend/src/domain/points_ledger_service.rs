//! Points ledger service implementing the [`PointsLedgerCommand`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    PointsLedgerCommand, PointsReceipt, ProfileRepository, ProfileRepositoryError,
};
use crate::domain::{
    Error, PROFILE_NOT_FOUND_MESSAGE, PointAdjustment, Profile, ShortCode, SingleFlight,
};

/// Loyalty ledger backed by a [`ProfileRepository`].
///
/// One adjustment runs at a time. A call arriving while another is between
/// lookup and update is rejected with a conflict, not queued.
pub struct PointsLedgerService<R> {
    repo: Arc<R>,
    flight: SingleFlight,
}

impl<R> PointsLedgerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            flight: SingleFlight::default(),
        }
    }
}

impl<R> PointsLedgerService<R>
where
    R: ProfileRepository,
{
    fn store_message(error: ProfileRepositoryError) -> String {
        match error {
            ProfileRepositoryError::Connection { message }
            | ProfileRepositoryError::Query { message }
            | ProfileRepositoryError::Decode { message } => message,
        }
    }

    async fn find_profile(&self, code: &ShortCode) -> Result<Profile, Error> {
        match self.repo.find_by_short_code(code).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(Error::not_found(PROFILE_NOT_FOUND_MESSAGE)),
            Err(error) => Err(Error::not_found(PROFILE_NOT_FOUND_MESSAGE)
                .with_details(json!({ "lookupError": error.to_string() }))),
        }
    }

    async fn adjust(
        &self,
        raw_code: &str,
        adjustment: PointAdjustment,
    ) -> Result<PointsReceipt, Error> {
        let code = ShortCode::parse(raw_code).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "code" }))
        })?;
        let _permit = self
            .flight
            .try_acquire()
            .ok_or_else(|| Error::conflict("another point adjustment is in progress"))?;

        let profile = self.find_profile(&code).await?;
        let total = adjustment.apply(profile.points);
        self.repo
            .update_points(&profile.id, total)
            .await
            .map_err(|err| Error::service_unavailable(Self::store_message(err)))?;

        Ok(PointsReceipt {
            points: total,
            message: adjustment.confirmation(total),
            clear_code: true,
        })
    }
}

#[async_trait]
impl<R> PointsLedgerCommand for PointsLedgerService<R>
where
    R: ProfileRepository,
{
    async fn add_point(&self, raw_code: String) -> Result<PointsReceipt, Error> {
        self.adjust(&raw_code, PointAdjustment::Add).await
    }

    async fn remove_point(&self, raw_code: String) -> Result<PointsReceipt, Error> {
        self.adjust(&raw_code, PointAdjustment::Remove).await
    }
}
