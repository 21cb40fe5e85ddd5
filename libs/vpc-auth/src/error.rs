// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for vpc-auth

use thiserror::Error;

/// Errors that can occur while configuring or applying an authenticator
#[derive(Error, Debug)]
pub enum AuthError {
    /// A credential was missing or malformed
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// The configured authentication type is not one this library implements
    #[error("Unsupported authentication type: {0}")]
    UnsupportedAuthType(String),

    /// Configuration error (missing environment variables, etc.)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The credential could not be encoded as an HTTP header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}
