// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request authentication for the IBM Cloud VPC client
//!
//! The VPC API accepts IAM bearer tokens. How a token is obtained (API key
//! exchange, trusted profile, a token handed over by another tool) is not
//! this library's business: an [`Authenticator`] receives each outgoing
//! request just before it is sent and stamps whatever headers it needs.
//!
//! Three authenticators ship with the crate:
//!
//! - [`NoAuthAuthenticator`]: leaves requests untouched (local mocks, proxies
//!   that inject credentials)
//! - [`BearerTokenAuthenticator`]: `Authorization: Bearer <token>`; the token
//!   can be replaced at runtime when the caller refreshes it
//! - [`BasicAuthenticator`]: `Authorization: Basic <base64(user:password)>`
//!
//! # Configuration from the environment
//!
//! [`authenticator_from_env`] builds one of the above from variables keyed on
//! a service name, e.g. for service `vpc`:
//!
//! ```text
//! VPC_AUTH_TYPE=bearertoken
//! VPC_BEARER_TOKEN=eyJraWQiOi...
//! ```
//!
//! # Example
//!
//! ```ignore
//! use vpc_auth::{Authenticator, BearerTokenAuthenticator};
//!
//! let auth = BearerTokenAuthenticator::new("eyJraWQiOi...")?;
//! let mut request = reqwest::Request::new(reqwest::Method::GET, url);
//! auth.authenticate(&mut request).await?;
//! ```

pub mod basic;
pub mod bearer;
pub mod env;
pub mod error;
pub mod noauth;

pub use basic::BasicAuthenticator;
pub use bearer::BearerTokenAuthenticator;
pub use env::{authenticator_from_env, authenticator_from_lookup};
pub use error::AuthError;
pub use noauth::NoAuthAuthenticator;

use async_trait::async_trait;
use strum::{Display, EnumString};

/// Authentication scheme implemented by an [`Authenticator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuthType {
    /// No credentials are attached
    #[strum(to_string = "noauth")]
    NoAuth,
    /// Static or externally refreshed bearer token
    #[strum(to_string = "bearertoken")]
    BearerToken,
    /// HTTP basic authentication
    Basic,
}

/// Decorates outgoing requests with credentials
///
/// Implementations must be cheap to call concurrently; the client shares one
/// authenticator across all requests.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// The scheme this authenticator implements
    fn auth_type(&self) -> AuthType;

    /// Add authentication headers to `request`
    ///
    /// # Errors
    /// Returns an error if the credential cannot be produced or encoded.
    async fn authenticate(&self, request: &mut reqwest::Request) -> Result<(), AuthError>;
}

/// Reject empty credentials and values still wrapped in `{}` or quotes
///
/// Wrapped values are almost always a copy/paste of a template placeholder
/// or of a JSON string literal.
pub(crate) fn validate_credential(name: &str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::InvalidCredential(format!(
            "{name} must not be empty"
        )));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) || value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(AuthError::InvalidCredential(format!(
            "{name} must not start or end with curly brackets or quotes; remove them"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case("noauth", AuthType::NoAuth)]
    #[test_case("bearerToken", AuthType::BearerToken)]
    #[test_case("BASIC", AuthType::Basic)]
    fn test_auth_type_parse(input: &str, expected: AuthType) {
        assert_eq!(AuthType::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_auth_type_display() {
        assert_eq!(AuthType::BearerToken.to_string(), "bearertoken");
        assert_eq!(AuthType::NoAuth.to_string(), "noauth");
    }

    #[test_case(""; "empty")]
    #[test_case("{token}"; "curly")]
    #[test_case("\"token\""; "quoted")]
    #[test_case("token}"; "trailing brace")]
    fn test_validate_credential_rejects(value: &str) {
        assert!(matches!(
            validate_credential("bearer token", value),
            Err(AuthError::InvalidCredential(_))
        ));
    }

    #[test]
    fn test_validate_credential_accepts() {
        assert!(validate_credential("password", "s3cr3t-value").is_ok());
    }
}
