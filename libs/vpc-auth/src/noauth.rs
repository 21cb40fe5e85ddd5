// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Pass-through authenticator

use async_trait::async_trait;

use crate::{AuthError, AuthType, Authenticator};

/// Authenticator that sends requests without credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

impl NoAuthAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::NoAuth
    }

    async fn authenticate(&self, _request: &mut reqwest::Request) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn test_noauth_leaves_headers_alone() {
        let url = reqwest::Url::parse("https://us-south.iaas.cloud.ibm.com/v1/vpcs").unwrap();
        let mut request = reqwest::Request::new(reqwest::Method::GET, url);

        NoAuthAuthenticator::new()
            .authenticate(&mut request)
            .await
            .unwrap();

        assert!(request.headers().is_empty());
    }
}
