// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authenticator configuration from environment variables
//!
//! Variables are prefixed with the service name, uppercased with `-`
//! replaced by `_`:
//!
//! | Variable              | Meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `<SVC>_AUTH_TYPE`     | `noauth`, `bearertoken` or `basic`        |
//! | `<SVC>_BEARER_TOKEN`  | token for `bearertoken`                   |
//! | `<SVC>_USERNAME`      | username for `basic`                      |
//! | `<SVC>_PASSWORD`      | password for `basic`                      |
//!
//! When `<SVC>_AUTH_TYPE` is unset the type is inferred from whichever
//! credentials are present.

use std::str::FromStr;
use std::sync::Arc;

use crate::{
    AuthError, AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator,
    NoAuthAuthenticator,
};

/// Build an authenticator for `service` from the process environment
///
/// # Errors
/// See [`authenticator_from_lookup`].
pub fn authenticator_from_env(service: &str) -> Result<Arc<dyn Authenticator>, AuthError> {
    authenticator_from_lookup(service, |name| std::env::var(name).ok())
}

/// Build an authenticator for `service` using `lookup` to resolve variables
///
/// # Errors
/// Returns [`AuthError::UnsupportedAuthType`] for an unknown auth type,
/// [`AuthError::ConfigError`] if the credentials the type needs are absent
/// or nothing can be inferred, and [`AuthError::InvalidCredential`] if a
/// credential is malformed.
pub fn authenticator_from_lookup<F>(
    service: &str,
    lookup: F,
) -> Result<Arc<dyn Authenticator>, AuthError>
where
    F: Fn(&str) -> Option<String>,
{
    let prefix = env_prefix(service);
    let var = |suffix: &str| {
        let name = format!("{prefix}_{suffix}");
        lookup(&name).filter(|v| !v.is_empty()).map(|v| (name, v))
    };

    let auth_type = match var("AUTH_TYPE") {
        Some((_, value)) => AuthType::from_str(&value)
            .map_err(|_| AuthError::UnsupportedAuthType(value.clone()))?,
        None if var("BEARER_TOKEN").is_some() => AuthType::BearerToken,
        None if var("USERNAME").is_some() || var("PASSWORD").is_some() => AuthType::Basic,
        None => {
            return Err(AuthError::ConfigError(format!(
                "{prefix}_AUTH_TYPE is not set and no credentials were found"
            )));
        }
    };

    let required = |suffix: &str| {
        var(suffix).map(|(_, v)| v).ok_or_else(|| {
            AuthError::ConfigError(format!(
                "{prefix}_{suffix} is required for {auth_type} authentication"
            ))
        })
    };

    tracing::debug!(service, %auth_type, "configuring authenticator from environment");

    let authenticator: Arc<dyn Authenticator> = match auth_type {
        AuthType::NoAuth => Arc::new(NoAuthAuthenticator::new()),
        AuthType::BearerToken => Arc::new(BearerTokenAuthenticator::new(required(
            "BEARER_TOKEN",
        )?)?),
        AuthType::Basic => Arc::new(BasicAuthenticator::new(
            required("USERNAME")?,
            required("PASSWORD")?,
        )?),
    };
    Ok(authenticator)
}

fn env_prefix(service: &str) -> String {
    service.to_uppercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test_case("vpc", "VPC")]
    #[test_case("my-vpc", "MY_VPC")]
    fn test_env_prefix(service: &str, expected: &str) {
        assert_eq!(env_prefix(service), expected);
    }

    #[test]
    fn test_explicit_noauth() {
        let auth = authenticator_from_lookup("vpc", lookup(&[("VPC_AUTH_TYPE", "noauth")]))
            .expect("noauth");
        assert_eq!(auth.auth_type(), AuthType::NoAuth);
    }

    #[test]
    fn test_explicit_bearer() {
        let auth = authenticator_from_lookup(
            "vpc",
            lookup(&[("VPC_AUTH_TYPE", "bearerToken"), ("VPC_BEARER_TOKEN", "abc")]),
        )
        .expect("bearer");
        assert_eq!(auth.auth_type(), AuthType::BearerToken);
    }

    #[test]
    fn test_inferred_bearer() {
        let auth = authenticator_from_lookup("vpc", lookup(&[("VPC_BEARER_TOKEN", "abc")]))
            .expect("bearer");
        assert_eq!(auth.auth_type(), AuthType::BearerToken);
    }

    #[test]
    fn test_inferred_basic() {
        let auth = authenticator_from_lookup(
            "my-vpc",
            lookup(&[("MY_VPC_USERNAME", "user"), ("MY_VPC_PASSWORD", "pass")]),
        )
        .expect("basic");
        assert_eq!(auth.auth_type(), AuthType::Basic);
    }

    #[test]
    fn test_nothing_configured() {
        let err = authenticator_from_lookup("vpc", lookup(&[])).err().unwrap();
        assert!(matches!(err, AuthError::ConfigError(_)));
    }

    #[test]
    fn test_iam_is_unsupported() {
        let err = authenticator_from_lookup("vpc", lookup(&[("VPC_AUTH_TYPE", "iam")]))
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::UnsupportedAuthType(t) if t == "iam"));
    }

    #[test]
    fn test_basic_missing_password() {
        let err = authenticator_from_lookup(
            "vpc",
            lookup(&[("VPC_AUTH_TYPE", "basic"), ("VPC_USERNAME", "user")]),
        )
        .err()
        .unwrap();
        match err {
            AuthError::ConfigError(msg) => assert!(msg.contains("VPC_PASSWORD")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
