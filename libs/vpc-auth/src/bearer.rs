// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Bearer token authenticator
//!
//! The token is supplied by the caller, typically an IAM access token. IAM
//! tokens expire after an hour; callers that keep a client around longer
//! swap in a fresh token with [`BearerTokenAuthenticator::set_bearer_token`]
//! without rebuilding the client.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::{AuthError, AuthType, Authenticator, validate_credential};

/// Authenticator that sends `Authorization: Bearer <token>`
#[derive(Debug)]
pub struct BearerTokenAuthenticator {
    token: RwLock<String>,
}

impl BearerTokenAuthenticator {
    /// Create a bearer token authenticator
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredential`] if the token is empty or
    /// wrapped in braces or quotes.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        validate_credential("bearer token", &token)?;
        Ok(Self {
            token: RwLock::new(token),
        })
    }

    /// Replace the token used for subsequent requests
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredential`] if the new token is invalid;
    /// the previous token stays in place.
    pub fn set_bearer_token(&self, token: impl Into<String>) -> Result<(), AuthError> {
        let token = token.into();
        validate_credential("bearer token", &token)?;
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
        tracing::debug!("bearer token replaced");
        Ok(())
    }

    fn current_token(&self) -> String {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::BearerToken
    }

    async fn authenticate(&self, request: &mut reqwest::Request) -> Result<(), AuthError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.current_token()))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn request() -> reqwest::Request {
        let url = reqwest::Url::parse("https://us-south.iaas.cloud.ibm.com/v1/vpcs").unwrap();
        reqwest::Request::new(reqwest::Method::GET, url)
    }

    #[tokio::test]
    async fn test_bearer_sets_authorization() {
        let auth = BearerTokenAuthenticator::new("eyJhbGciOi.token").unwrap();
        let mut req = request();
        auth.authenticate(&mut req).await.unwrap();

        let header = req.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer eyJhbGciOi.token");
        assert!(header.is_sensitive());
    }

    #[tokio::test]
    async fn test_bearer_token_can_be_replaced() {
        let auth = BearerTokenAuthenticator::new("first").unwrap();
        auth.set_bearer_token("second").unwrap();

        let mut req = request();
        auth.authenticate(&mut req).await.unwrap();
        assert_eq!(
            req.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer second"
        );
    }

    #[test]
    fn test_bearer_rejects_invalid_replacement() {
        let auth = BearerTokenAuthenticator::new("first").unwrap();
        assert!(auth.set_bearer_token("").is_err());
        assert_eq!(auth.current_token(), "first");
    }

    #[test]
    fn test_bearer_rejects_placeholder() {
        assert!(BearerTokenAuthenticator::new("{BEARER_TOKEN}").is_err());
    }

    #[tokio::test]
    async fn test_bearer_rejects_unencodable_token() {
        let auth = BearerTokenAuthenticator::new("line\nbreak").unwrap();
        let mut req = request();
        assert!(matches!(
            auth.authenticate(&mut req).await,
            Err(AuthError::InvalidHeader(_))
        ));
    }
}
