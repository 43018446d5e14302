//! Startup settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CAFE_*` environment variables and config
//! files. The store URL and key are required; the service does not start
//! without them.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;
use zeroize::Zeroizing;

use crate::outbound::store::StoreConfig;

/// Length of the key fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    8080,
);

/// Configuration values for the café console backend.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAFE")]
pub struct AppSettings {
    /// Hosted store project URL.
    pub store_url: String,
    /// Hosted store access key.
    pub store_key: String,
    /// Listen address; defaults to `0.0.0.0:8080`.
    pub bind_addr: Option<SocketAddr>,
}

/// Settings that load but cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("CAFE_STORE_URL is not a valid URL: {0}")]
    StoreUrl(#[from] url::ParseError),
    #[error("CAFE_STORE_KEY must not be empty")]
    EmptyStoreKey,
}

impl AppSettings {
    /// Configured listen address, falling back to the default.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Fingerprint of the configured store key, safe to log.
    #[must_use]
    pub fn store_key_fingerprint(&self) -> String {
        key_fingerprint(&self.store_key)
    }

    /// Consume the settings into store connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the URL does not parse or the key is
    /// blank.
    pub fn into_store_config(self) -> Result<StoreConfig, SettingsError> {
        let url = Url::parse(self.store_url.trim())?;
        let key = Zeroizing::new(self.store_key);
        if key.trim().is_empty() {
            return Err(SettingsError::EmptyStoreKey);
        }
        Ok(StoreConfig { url, key })
    }
}

/// Truncated SHA-256 fingerprint of a secret, as 16 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use cafe_backend::config::key_fingerprint;
///
/// let fp = key_fingerprint("service-role-key");
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn key_fingerprint(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    hex::encode(digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
}
