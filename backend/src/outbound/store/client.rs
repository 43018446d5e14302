//! Shared reqwest client for the hosted store's REST endpoint.
//!
//! Owns transport details only: URL layout, authentication headers, status
//! handling and error body decoding. The per-collection repositories build
//! on top of it.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use zeroize::Zeroizing;

use super::dto::StoreErrorDto;

const REST_PATH: &str = "rest/v1/";
const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "Prefer";
const RETURN_MINIMAL: &str = "return=minimal";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Connection settings for the hosted store.
pub struct StoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: Url,
    /// Access key sent as both `apikey` and bearer token.
    pub key: Zeroizing<String>,
}

/// Errors raised while building a [`StoreClient`].
#[derive(Debug, thiserror::Error)]
pub enum StoreClientError {
    #[error("store url cannot be used as a REST base: {0}")]
    Url(#[from] url::ParseError),
    #[error("store key is not a valid header value")]
    Key(#[from] InvalidHeaderValue),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure of a single store round trip, before mapping to a port error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum StoreFailure {
    /// The request never produced a response.
    Transport(String),
    /// The store answered with a non-success status.
    Rejected { status: StatusCode, message: String },
}

/// Authenticated client scoped to `<url>/rest/v1/`.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    rest_base: Url,
}

impl StoreClient {
    /// Build a client whose default headers carry the access key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClientError`] when the URL cannot act as a base, the
    /// key contains bytes not allowed in headers, or reqwest fails to
    /// initialise.
    pub fn new(config: StoreConfig) -> Result<Self, StoreClientError> {
        let rest_base = rest_base(&config.url)?;
        let http = Client::builder()
            .default_headers(auth_headers(&config.key)?)
            .build()?;
        Ok(Self { http, rest_base })
    }

    pub(super) fn table_url(&self, table: &str) -> Result<Url, StoreFailure> {
        self.rest_base
            .join(table)
            .map_err(|error| StoreFailure::Transport(format!("invalid table url: {error}")))
    }

    pub(super) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Builder for a write that does not need the affected rows back.
    pub(super) fn write(&self, method: Method, url: Url) -> RequestBuilder {
        self.request(method, url)
            .header(PREFER_HEADER, RETURN_MINIMAL)
    }

    /// Builder for a read that must match exactly one row.
    pub(super) fn single(&self, url: Url) -> RequestBuilder {
        self.request(Method::GET, url).header(ACCEPT, SINGLE_OBJECT)
    }

    /// Send `request` and return the body of a successful response.
    ///
    /// `Ok(None)` means the store answered `406 Not Acceptable`, which for a
    /// single-object read signals zero or several matching rows.
    pub(super) async fn execute(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<Vec<u8>>, StoreFailure> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreFailure::Rejected {
                status,
                message: rejection_message(status, body.as_ref()),
            });
        }
        Ok(Some(body.to_vec()))
    }
}

fn rest_base(url: &Url) -> Result<Url, url::ParseError> {
    let mut base = url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(REST_PATH)
}

fn auth_headers(key: &str) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut api_key = HeaderValue::from_str(key)?;
    api_key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(API_KEY_HEADER, api_key);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

fn map_transport_error(error: reqwest::Error) -> StoreFailure {
    StoreFailure::Transport(error.to_string())
}

/// The store's own `message`, or a status summary when none decodes.
pub(super) fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<StoreErrorDto>(body)
        .ok()
        .and_then(|dto| dto.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            format!("store responded {}: {reason}", status.as_u16())
        })
}
