//! Port for the hosted `profiles` collection.

use async_trait::async_trait;

use crate::domain::{Points, Profile, ProfileId, ShortCode};

use super::define_port_error;

define_port_error! {
    /// Errors raised by profile repository adapters.
    pub enum ProfileRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "profile store connection failed: {message}",
        /// The store rejected the request; `message` is the store's own text.
        Query { message: String } => "{message}",
        /// A response body did not match the expected record shape.
        Decode { message: String } => "profile store returned malformed data: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Look up the single profile whose short code equals `code`.
    ///
    /// Returns `Ok(None)` when zero or several rows match.
    async fn find_by_short_code(
        &self,
        code: &ShortCode,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Store `points` as the new counter for profile `id`.
    async fn update_points(&self, id: &ProfileId, points: Points)
    -> Result<(), ProfileRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_names_the_store() {
        let err = ProfileRepositoryError::connection("timed out");
        assert_eq!(err.to_string(), "profile store connection failed: timed out");
    }
}
