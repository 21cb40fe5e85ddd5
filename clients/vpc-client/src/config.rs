// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration from environment variables
//!
//! Variables are prefixed with the upper-cased service name, so for the
//! default service `vpc`:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `VPC_URL` | service URL |
//! | `VPC_API_VERSION` | API version date |
//! | `VPC_DISABLE_SSL` | `true` to skip TLS certificate checks |
//! | `VPC_AUTH_TYPE`, `VPC_BEARER_TOKEN`, ... | see [`vpc_auth::env`] |

use std::sync::Arc;

use vpc_auth::{Authenticator, authenticator_from_lookup};

use crate::{ClientBuilder, Error, Result};

/// Settings read from the environment
#[derive(Clone)]
pub struct ClientConfig {
    pub service_url: Option<String>,
    pub version: Option<String>,
    pub disable_ssl_verification: bool,
    pub authenticator: Arc<dyn Authenticator>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .field("auth_type", &self.authenticator.auth_type())
            .finish()
    }
}

impl ClientConfig {
    /// Read the configuration for `service` from the process environment
    pub fn from_env(service: &str) -> Result<Self> {
        Self::from_lookup(service, |key| std::env::var(key).ok())
    }

    /// Read the configuration for `service` through `lookup`
    pub fn from_lookup<F>(service: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service.to_uppercase().replace('-', "_");
        let var = |suffix: &str| {
            lookup(&format!("{prefix}_{suffix}")).filter(|value| !value.trim().is_empty())
        };

        let disable_ssl_verification = match var("DISABLE_SSL") {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                Error::Configuration(format!("{prefix}_DISABLE_SSL: invalid value {value:?}"))
            })?,
            None => false,
        };

        Ok(Self {
            service_url: var("URL"),
            version: var("API_VERSION"),
            disable_ssl_verification,
            authenticator: authenticator_from_lookup(service, &lookup)?,
        })
    }

    /// Client builder carrying these settings
    pub fn into_builder(self) -> ClientBuilder {
        let mut builder = ClientBuilder::default()
            .authenticator(self.authenticator)
            .disable_ssl_verification(self.disable_ssl_verification);
        if let Some(url) = self.service_url {
            builder = builder.service_url(url);
        }
        if let Some(version) = self.version {
            builder = builder.version(version);
        }
        builder
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::HashMap;
    use vpc_auth::AuthType;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_full_config() {
        let config = ClientConfig::from_lookup(
            "vpc",
            lookup(&[
                ("VPC_URL", "https://eu-gb.iaas.cloud.ibm.com/v1"),
                ("VPC_API_VERSION", "2020-12-01"),
                ("VPC_DISABLE_SSL", "TRUE"),
                ("VPC_AUTH_TYPE", "bearertoken"),
                ("VPC_BEARER_TOKEN", "tok"),
            ]),
        )
        .unwrap();

        assert_eq!(
            config.service_url.as_deref(),
            Some("https://eu-gb.iaas.cloud.ibm.com/v1")
        );
        assert_eq!(config.version.as_deref(), Some("2020-12-01"));
        assert!(config.disable_ssl_verification);
        assert_eq!(config.authenticator.auth_type(), AuthType::BearerToken);

        let client = config.into_builder().build().unwrap();
        assert_eq!(client.baseurl(), "https://eu-gb.iaas.cloud.ibm.com/v1");
        assert_eq!(client.version(), "2020-12-01");
    }

    #[test]
    fn test_defaults_when_unset() {
        let config =
            ClientConfig::from_lookup("vpc", lookup(&[("VPC_AUTH_TYPE", "noauth")])).unwrap();
        assert_eq!(config.service_url, None);
        assert_eq!(config.version, None);
        assert!(!config.disable_ssl_verification);
    }

    #[test]
    fn test_invalid_disable_ssl() {
        let err = ClientConfig::from_lookup(
            "vpc",
            lookup(&[("VPC_AUTH_TYPE", "noauth"), ("VPC_DISABLE_SSL", "maybe")]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_missing_auth_is_an_error() {
        let err = ClientConfig::from_lookup("vpc", lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_hyphenated_service_name() {
        let config = ClientConfig::from_lookup(
            "my-vpc",
            lookup(&[("MY_VPC_AUTH_TYPE", "noauth"), ("MY_VPC_URL", "http://localhost/v1")]),
        )
        .unwrap();
        assert_eq!(config.service_url.as_deref(), Some("http://localhost/v1"));
    }
}
