// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP basic authenticator

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::{AuthError, AuthType, Authenticator, validate_credential};

/// Authenticator that sends `Authorization: Basic <base64(username:password)>`
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    header: HeaderValue,
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl BasicAuthenticator {
    /// Create a basic authenticator
    ///
    /// # Errors
    /// Returns an error if either credential is empty or wrapped in braces
    /// or quotes, or if the encoded header is not a valid header value.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let username = username.into();
        let password = password.into();
        validate_credential("username", &username)?;
        validate_credential("password", &password)?;

        let credentials = format!("{}:{}", username, password);
        let encoded = STANDARD.encode(credentials.as_bytes());
        let mut header = HeaderValue::from_str(&format!("Basic {}", encoded))?;
        header.set_sensitive(true);

        Ok(Self { username, header })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::Basic
    }

    async fn authenticate(&self, request: &mut reqwest::Request) -> Result<(), AuthError> {
        request
            .headers_mut()
            .insert(AUTHORIZATION, self.header.clone());
        Ok(())
    }
}
