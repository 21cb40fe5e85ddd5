// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for vpc-client

use reqwest::StatusCode;
use thiserror::Error;
use vpc_auth::AuthError;
use vpc_types::ApiError;

use crate::ResponseValue;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by client operations
#[derive(Error, Debug)]
pub enum Error {
    /// Required parameters were not supplied; no request was sent
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),

    /// The request could not be assembled (unserializable body, bad URL)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The client itself is misconfigured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The authenticator could not decorate the request
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthError),

    /// Transport failure (connect, TLS, timeout, body read)
    #[error("Communication error: {0}")]
    Communication(#[from] reqwest::Error),

    /// The API answered with a 4xx/5xx and an error document
    #[error("Error response ({}): {}", .0.status(), .0.inner())]
    ErrorResponse(ResponseValue<ApiError>),

    /// The API answered with a 4xx/5xx that carried no error document
    #[error("Unexpected response ({status}): {body}")]
    UnexpectedResponse { status: StatusCode, body: String },

    /// A 2xx response body did not match the expected shape
    #[error("Invalid response payload ({status}): {source}")]
    InvalidResponsePayload {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    /// HTTP status of the response that caused this error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ErrorResponse(rv) => Some(rv.status()),
            Error::UnexpectedResponse { status, .. } => Some(*status),
            Error::InvalidResponsePayload { status, .. } => Some(*status),
            Error::Communication(e) => e.status(),
            _ => None,
        }
    }

    /// The decoded API error document, for error responses
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::ErrorResponse(rv) => Some(rv.inner()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;

    #[test]
    fn test_missing_parameters_message() {
        let err = Error::MissingParameters(vec!["vpc_id", "id"]);
        assert_eq!(err.to_string(), "Missing required parameters: vpc_id, id");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_response_accessors() {
        let body = ApiError {
            errors: vec![vpc_types::ApiErrorItem {
                code: "not_found".into(),
                message: "Subnet not found".into(),
                more_info: None,
                target: None,
            }],
            trace: Some("abc".into()),
            status_code: Some(404),
        };
        let err = Error::ErrorResponse(ResponseValue::new(
            body,
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
        ));

        assert!(err.is_not_found());
        assert_eq!(err.api_error().map(|e| e.errors.len()), Some(1));
        assert_eq!(
            err.to_string(),
            "Error response (404 Not Found): not_found: Subnet not found (trace abc)"
        );
    }
}
