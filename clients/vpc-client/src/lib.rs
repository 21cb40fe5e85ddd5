// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IBM Cloud VPC Client Library
//!
//! Typed access to the IBM Cloud Virtual Private Cloud API, version
//! `2020-11-17`, generation 2. Every API operation is a method on [`Client`]
//! returning a request builder; set the parameters and `send()` it.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vpc_client::{BearerTokenAuthenticator, Client};
//!
//! let auth = BearerTokenAuthenticator::new(token)?;
//! let client = Client::for_region("eu-de", Arc::new(auth))?;
//!
//! let vpc = client.create_vpc().name("my-vpc").send().await?;
//! let subnets = client.list_subnets().limit(50).send().await?;
//! client.delete_subnet().id(&subnet_id).send().await?;
//! ```
//!
//! ### Configuration from the environment
//!
//! [`Client::from_env`] reads `VPC_URL`, `VPC_API_VERSION`,
//! `VPC_DISABLE_SSL` and the authenticator settings understood by
//! [`vpc_auth::authenticator_from_env`].
//!
//! ### Pagination
//!
//! Paginated list builders implement [`ListRequest`]:
//!
//! ```ignore
//! use vpc_client::ListRequest;
//!
//! let every_key = client.list_keys().limit(100).collect_all().await?;
//! ```
//!
//! ### Instance actions
//!
//! ```ignore
//! client.stop_instance(&instance_id, true).await?;
//! client.start_instance(&instance_id).await?;
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub mod actions;
pub mod builder;
pub mod config;
pub mod error;
mod operation;
pub mod pagination;
pub mod response;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::ListRequest;
pub use response::ResponseValue;

// Re-export vpc-auth types for convenience
pub use vpc_auth::{
    AuthError, AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator,
    NoAuthAuthenticator,
};

// Re-export the API types so callers need only this crate
pub use vpc_types as types;

/// Default service URL (the `us-south` region)
pub const DEFAULT_SERVICE_URL: &str = "https://us-south.iaas.cloud.ibm.com/v1";

/// API version date sent with every request
pub const API_VERSION: &str = "2020-11-17";

/// Infrastructure generation sent with every request
pub const GENERATION: u32 = 2;

/// Service name used for analytics and environment configuration
pub const SERVICE_NAME: &str = "vpc";

const USER_AGENT: &str = concat!("vpc-client/", env!("CARGO_PKG_VERSION"));

/// Service URL for a region, e.g. `eu-de` gives
/// `https://eu-de.iaas.cloud.ibm.com/v1`
pub fn service_url_for_region(region: &str) -> String {
    format!("https://{region}.iaas.cloud.ibm.com/v1")
}

/// Client for the VPC API
///
/// Cheap to clone: clones share the connection pool and the authenticator.
#[derive(Clone)]
pub struct Client {
    baseurl: String,
    version: String,
    generation: u32,
    client: reqwest::Client,
    default_headers: HeaderMap,
    authenticator: Arc<dyn Authenticator>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("baseurl", &self.baseurl)
            .field("version", &self.version)
            .field("generation", &self.generation)
            .field("default_headers", &self.default_headers)
            .field("auth_type", &self.authenticator.auth_type())
            .finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client for `service_url` with default settings
    pub fn new(service_url: &str, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Self::builder()
            .service_url(service_url)
            .authenticator(authenticator)
            .build()
    }

    /// Client for the public endpoint of `region`
    pub fn for_region(region: &str, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Self::new(&service_url_for_region(region), authenticator)
    }

    /// Client configured from `VPC_*` environment variables
    pub fn from_env() -> Result<Self> {
        ClientConfig::from_env(SERVICE_NAME)?.into_builder().build()
    }

    /// Service URL without a trailing slash
    pub fn baseurl(&self) -> &str {
        &self.baseurl
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The underlying HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Headers configured on the [`ClientBuilder`], sent with every request
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }
}

/// Builder for [`Client`]
///
/// Only the authenticator is mandatory.
#[derive(Default)]
pub struct ClientBuilder {
    service_url: Option<String>,
    version: Option<String>,
    generation: Option<u32>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    headers: HeaderMap,
    authenticator: Option<Arc<dyn Authenticator>>,
    disable_ssl_verification: bool,
    http_client: Option<reqwest::Client>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field("generation", &self.generation)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field(
                "auth_type",
                &self.authenticator.as_ref().map(|a| a.auth_type()),
            )
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .finish()
    }
}

impl ClientBuilder {
    /// Base URL of the API, defaults to [`DEFAULT_SERVICE_URL`]
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Use the public endpoint of `region`
    pub fn region(self, region: &str) -> Self {
        self.service_url(service_url_for_region(region))
    }

    /// API version date, defaults to [`API_VERSION`]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Infrastructure generation, defaults to [`GENERATION`]
    pub fn generation(mut self, generation: u32) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Total timeout per request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Header sent with every request, replacing the built-in value for
    /// `Accept`, `Content-Type` or `X-IBMCloud-SDK-Analytics`
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Headers sent with every request, merged over any set before
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Accept invalid TLS certificates. Only for test endpoints.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Use a preconfigured HTTP client; timeout, user agent and TLS
    /// settings on this builder are then ignored
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<Client> {
        // reqwest is built without a default crypto provider; a second
        // install attempt returns Err and is harmless
        let _ = rustls::crypto::ring::default_provider().install_default();

        let authenticator = self
            .authenticator
            .ok_or_else(|| Error::Configuration("an authenticator is required".to_string()))?;

        let baseurl = self
            .service_url
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_URL)
            .trim_end_matches('/')
            .to_string();
        validate_service_url(&baseurl)?;

        let version = self.version.unwrap_or_else(|| API_VERSION.to_string());
        if version.trim().is_empty() {
            return Err(Error::Configuration("version must not be empty".to_string()));
        }

        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if self.disable_ssl_verification {
                    builder = builder.danger_accept_invalid_certs(true);
                }
                builder.build().map_err(|e| {
                    Error::Configuration(format!("cannot build HTTP client: {e}"))
                })?
            }
        };

        Ok(Client {
            baseurl,
            version,
            generation: self.generation.unwrap_or(GENERATION),
            client,
            default_headers: self.headers,
            authenticator,
        })
    }
}

fn validate_service_url(url: &str) -> Result<()> {
    if url.contains(['{', '}', '"']) {
        return Err(Error::Configuration(format!(
            "service URL {url} contains invalid characters"
        )));
    }
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| Error::Configuration(format!("invalid service URL {url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::Configuration(format!(
            "service URL {url} must use http or https"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn noauth() -> Arc<dyn Authenticator> {
        Arc::new(NoAuthAuthenticator::new())
    }

    #[test]
    fn test_builder_defaults() {
        let client = Client::builder().authenticator(noauth()).build().unwrap();
        assert_eq!(client.baseurl(), DEFAULT_SERVICE_URL);
        assert_eq!(client.version(), "2020-11-17");
        assert_eq!(client.generation(), 2);
    }

    #[test]
    fn test_builder_requires_authenticator() {
        let err = Client::builder().build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = Client::new("http://localhost:8080/v1/", noauth()).unwrap();
        assert_eq!(client.baseurl(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_for_region() {
        let client = Client::for_region("eu-de", noauth()).unwrap();
        assert_eq!(client.baseurl(), "https://eu-de.iaas.cloud.ibm.com/v1");
    }

    #[test]
    fn test_invalid_service_urls() {
        for url in ["not a url", "ftp://host/v1", "https://{region}.iaas.cloud.ibm.com/v1"] {
            let err = Client::new(url, noauth()).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "{url}");
        }
    }

    #[test]
    fn test_overrides() {
        let client = Client::builder()
            .region("jp-tok")
            .version("2021-01-12")
            .generation(1)
            .timeout(Duration::from_secs(5))
            .disable_ssl_verification(true)
            .authenticator(noauth())
            .build()
            .unwrap();
        assert_eq!(client.baseurl(), "https://jp-tok.iaas.cloud.ibm.com/v1");
        assert_eq!(client.version(), "2021-01-12");
        assert_eq!(client.generation(), 1);
    }

    #[test]
    fn test_empty_version_rejected() {
        let err = Client::builder()
            .version(" ")
            .authenticator(noauth())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
