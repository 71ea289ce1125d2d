//! Gateway credentials and Basic-Auth derivation

use crate::error::{CordaError, CordaResult};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const CREDENTIAL_NAME: &str = "r3CordaApi";
pub const DEFAULT_BASE_URL: &str = "http://localhost:10006/api/rest/v1";

pub const BASE_URL_ENV: &str = "CORDA_BASE_URL";
pub const USERNAME_ENV: &str = "CORDA_USERNAME";
pub const PASSWORD_ENV: &str = "CORDA_PASSWORD";

/// RPC user configured on the Corda node
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// For a local node: http://localhost:10006/api/rest/v1
    #[serde(default)]
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Base URL without trailing slash, falling back to the local node default
    pub fn base_url(&self) -> &str {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url(), path)
        } else {
            format!("{}/{}", self.base_url(), path)
        }
    }

    pub fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes())
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Supplies credentials to one executor invocation
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    async fn resolve(&self) -> CordaResult<Credentials>;
}

#[async_trait]
impl CredentialResolver for Credentials {
    async fn resolve(&self) -> CordaResult<Credentials> {
        Ok(self.clone())
    }
}

/// Reads `CORDA_BASE_URL`, `CORDA_USERNAME` and `CORDA_PASSWORD` on every resolve,
/// so rotated secrets are picked up by the next batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

#[async_trait]
impl CredentialResolver for EnvCredentials {
    async fn resolve(&self) -> CordaResult<Credentials> {
        let username = std::env::var(USERNAME_ENV)
            .map_err(|_| CordaError::Credentials(format!("{} is not set", USERNAME_ENV)))?;
        let password = std::env::var(PASSWORD_ENV)
            .map_err(|_| CordaError::Credentials(format!("{} is not set", PASSWORD_ENV)))?;
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_default();

        Ok(Credentials {
            base_url,
            username,
            password,
        })
    }
}
