//! Store-backed implementation of [`ProfileRepository`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use tracing::debug;

use super::client::{StoreClient, StoreFailure};
use super::dto::{PointsUpdateDto, ProfileRowDto};
use super::eq_filter;
use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{Points, Profile, ProfileId, ShortCode};

const TABLE: &str = "profiles";

/// `profiles` collection reached through a [`StoreClient`].
#[derive(Clone)]
pub struct StoreProfileRepository {
    store: StoreClient,
}

impl StoreProfileRepository {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    fn lookup_request(&self, code: &ShortCode) -> Result<RequestBuilder, ProfileRepositoryError> {
        let mut url = self.store.table_url(TABLE).map_err(map_failure)?;
        url.query_pairs_mut()
            .append_pair("select", "id,points")
            .append_pair("short_code", &eq_filter(code.as_str()));
        Ok(self.store.single(url))
    }

    fn update_request(
        &self,
        id: &ProfileId,
        points: Points,
    ) -> Result<RequestBuilder, ProfileRepositoryError> {
        let mut url = self.store.table_url(TABLE).map_err(map_failure)?;
        url.query_pairs_mut()
            .append_pair("id", &eq_filter(id.as_str()));
        Ok(self.store.write(Method::PATCH, url).json(&PointsUpdateDto {
            points: points.value(),
        }))
    }
}

fn map_failure(failure: StoreFailure) -> ProfileRepositoryError {
    match failure {
        StoreFailure::Transport(message) => ProfileRepositoryError::connection(message),
        StoreFailure::Rejected { status, message } => {
            debug!(status = status.as_u16(), %message, "profile store rejected request");
            ProfileRepositoryError::query(message)
        }
    }
}

fn parse_profile(body: &[u8]) -> Result<Profile, ProfileRepositoryError> {
    serde_json::from_slice::<ProfileRowDto>(body)
        .map(ProfileRowDto::into_domain)
        .map_err(|error| ProfileRepositoryError::decode(format!("invalid profile payload: {error}")))
}

#[async_trait]
impl ProfileRepository for StoreProfileRepository {
    async fn find_by_short_code(
        &self,
        code: &ShortCode,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let body = self
            .store
            .execute(self.lookup_request(code)?)
            .await
            .map_err(map_failure)?;
        match body {
            Some(bytes) => parse_profile(&bytes).map(Some),
            None => {
                debug!(%code, "no single profile matched short code");
                Ok(None)
            }
        }
    }

    async fn update_points(
        &self,
        id: &ProfileId,
        points: Points,
    ) -> Result<(), ProfileRepositoryError> {
        self.store
            .execute(self.update_request(id, points)?)
            .await
            .map_err(map_failure)?;
        debug!(%id, %points, "stored loyalty points");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;
    use reqwest::header::ACCEPT;
    use zeroize::Zeroizing;

    use super::*;
    use crate::outbound::store::StoreConfig;

    fn repository() -> StoreProfileRepository {
        let store = StoreClient::new(StoreConfig {
            url: Url::parse("https://abc.supabase.co").expect("valid url"),
            key: Zeroizing::new("anon-key".to_owned()),
        })
        .expect("client builds");
        StoreProfileRepository::new(store)
    }

    #[test]
    fn lookup_selects_id_and_points_by_exact_code() {
        let code = ShortCode::parse("042").expect("valid code");
        let request = repository()
            .lookup_request(&code)
            .expect("request")
            .build()
            .expect("builds");

        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/profiles?select=id%2Cpoints&short_code=eq.042"
        );
        assert_eq!(
            request.headers().get(ACCEPT).and_then(|v| v.to_str().ok()),
            Some("application/vnd.pgrst.object+json")
        );
    }

    #[test]
    fn update_sets_only_points() {
        let request = repository()
            .update_request(&ProfileId::new("p-1"), Points::new(0))
            .expect("request")
            .build()
            .expect("builds");

        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(request.url().query(), Some("id=eq.p-1"));
        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("buffered body");
        assert_eq!(body, br#"{"points":0}"#);
    }

    #[test]
    fn parse_profile_reports_decode_errors() {
        let error = parse_profile(b"[]").expect_err("array is not an object");
        assert!(matches!(error, ProfileRepositoryError::Decode { .. }));
    }

    #[test]
    fn transport_failures_map_to_connection() {
        let error = map_failure(StoreFailure::Transport("connection refused".to_owned()));
        assert_eq!(
            error,
            ProfileRepositoryError::Connection {
                message: "connection refused".to_owned()
            }
        );
    }
}
