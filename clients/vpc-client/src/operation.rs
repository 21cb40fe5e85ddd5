// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request executor shared by every operation builder
//!
//! A builder hands its collected parameters to an [`Operation`], which checks
//! that required ones are present, renders the URL (path substitution plus
//! `version`/`generation` and the builder's query parameters), attaches the
//! standard headers and the body, lets the authenticator sign the request and
//! decodes the response.
//!
//! Header precedence, lowest first: the standard `Accept`,
//! `X-IBMCloud-SDK-Analytics` and `Content-Type` headers, the client's
//! configured headers, then the headers set on the builder for this call.

use std::fmt::Display;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use vpc_types::ApiError;

use crate::{Client, Error, ResponseValue, Result, SERVICE_NAME};

pub(crate) const JSON: &str = "application/json";
pub(crate) const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Header carrying the SDK analytics string
pub(crate) const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

pub(crate) struct Operation<'a> {
    client: &'a Client,
    operation_id: &'static str,
    method: Method,
    template: &'static str,
    path: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<(&'static str, Vec<u8>)>,
    headers: HeaderMap,
    missing: Vec<&'static str>,
    invalid: Option<String>,
}

impl<'a> Operation<'a> {
    pub(crate) fn new(
        client: &'a Client,
        operation_id: &'static str,
        method: Method,
        template: &'static str,
    ) -> Self {
        Self {
            client,
            operation_id,
            method,
            template,
            path: Vec::new(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
            missing: Vec::new(),
            invalid: None,
        }
    }

    /// Bind a path parameter; absent and empty values are both missing
    pub(crate) fn path(mut self, name: &'static str, value: Option<String>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.path.push((name, value)),
            _ => self.missing.push(name),
        }
        self
    }

    /// Add a query parameter when it is set
    pub(crate) fn query<V: Display>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    /// Record `name` as missing unless `present`
    pub(crate) fn require(mut self, name: &'static str, present: bool) -> Self {
        if !present {
            self.missing.push(name);
        }
        self
    }

    /// Headers set by the caller for this request
    pub(crate) fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// JSON body for POST and PUT
    pub(crate) fn json<B: Serialize>(self, body: &B) -> Self {
        self.encode(JSON, body)
    }

    /// JSON merge-patch body for PATCH
    pub(crate) fn merge_patch<B: Serialize>(self, body: &B) -> Self {
        self.encode(MERGE_PATCH_JSON, body)
    }

    /// JSON body the caller must supply
    pub(crate) fn required_json<B: Serialize>(self, name: &'static str, body: Option<&B>) -> Self {
        match body {
            Some(body) => self.json(body),
            None => self.require(name, false),
        }
    }

    /// JSON body that may be left out entirely
    pub(crate) fn optional_json<B: Serialize>(self, body: Option<&B>) -> Self {
        match body {
            Some(body) => self.json(body),
            None => self,
        }
    }

    fn encode<B: Serialize>(mut self, content_type: &'static str, body: &B) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = Some((content_type, bytes)),
            Err(e) => self.invalid = Some(format!("cannot serialize request body: {e}")),
        }
        self
    }

    /// Send the request and decode a JSON response body into `T`
    pub(crate) async fn send<T: DeserializeOwned>(self) -> Result<ResponseValue<T>> {
        let response = self.execute().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        match serde_json::from_slice(&bytes) {
            Ok(inner) => Ok(ResponseValue::new(inner, status, headers)),
            Err(source) => Err(Error::InvalidResponsePayload {
                status,
                source,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }),
        }
    }

    /// Send the request and discard any response body
    pub(crate) async fn send_empty(self) -> Result<ResponseValue<()>> {
        let response = self.execute().await?;
        Ok(ResponseValue::new(
            (),
            response.status(),
            response.headers().clone(),
        ))
    }

    async fn execute(self) -> Result<reqwest::Response> {
        let Operation {
            client,
            operation_id,
            method,
            template,
            path,
            query,
            body,
            headers,
            missing,
            invalid,
        } = self;

        if !missing.is_empty() {
            return Err(Error::MissingParameters(missing));
        }
        if let Some(message) = invalid {
            return Err(Error::InvalidRequest(message));
        }

        let url = render_url(client, template, &path, &query)?;

        let mut builder = client
            .client()
            .request(method, url)
            .header(ACCEPT, JSON)
            .header(ANALYTICS_HEADER, analytics_value(operation_id));
        if let Some((content_type, bytes)) = body {
            builder = builder.header(CONTENT_TYPE, content_type).body(bytes);
        }
        let mut request = builder.build()?;
        merge_headers(request.headers_mut(), client.default_headers());
        merge_headers(request.headers_mut(), &headers);

        client.authenticator().authenticate(&mut request).await?;

        debug!(
            operation = operation_id,
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );
        let response = client.client().execute(request).await?;
        let status = response.status();
        debug!(operation = operation_id, status = %status, "received response");

        if status.is_success() {
            return Ok(response);
        }

        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        match serde_json::from_slice::<ApiError>(&bytes) {
            Ok(api_error) if !api_error.errors.is_empty() => Err(Error::ErrorResponse(
                ResponseValue::new(api_error, status, headers),
            )),
            _ => {
                let body = String::from_utf8_lossy(&bytes).into_owned();
                warn!(
                    operation = operation_id,
                    status = %status,
                    "error response without an error document"
                );
                Err(Error::UnexpectedResponse { status, body })
            }
        }
    }
}

/// Replace every header named in `overrides`, keeping repeated values
fn merge_headers(target: &mut HeaderMap, overrides: &HeaderMap) {
    for name in overrides.keys() {
        target.remove(name);
    }
    for (name, value) in overrides {
        target.append(name, value.clone());
    }
}

fn analytics_value(operation_id: &str) -> String {
    format!("service_name={SERVICE_NAME};service_version=V1;operation_id={operation_id}")
}

/// Substitute percent-encoded path parameters into `template` and append the
/// query string, `version` and `generation` first
fn render_url(
    client: &Client,
    template: &str,
    path: &[(&'static str, String)],
    query: &[(&'static str, String)],
) -> Result<Url> {
    let mut rendered = String::with_capacity(client.baseurl().len() + template.len());
    rendered.push_str(client.baseurl());

    for segment in template.split('/').filter(|s| !s.is_empty()) {
        rendered.push('/');
        match segment
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
        {
            Some(name) => {
                let value = path
                    .iter()
                    .find(|(param, _)| *param == name)
                    .map(|(_, value)| value)
                    .ok_or_else(|| {
                        Error::InvalidRequest(format!("no value for path parameter {name}"))
                    })?;
                rendered.push_str(&urlencoding::encode(value));
            }
            None => rendered.push_str(segment),
        }
    }

    let mut url = Url::parse(&rendered)
        .map_err(|e| Error::InvalidRequest(format!("invalid URL {rendered}: {e}")))?;
    {
        let generation = client.generation().to_string();
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("version", client.version());
        pairs.append_pair("generation", &generation);
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use reqwest::header::HeaderValue;
    use std::sync::Arc;
    use vpc_auth::NoAuthAuthenticator;

    fn client() -> Client {
        Client::builder()
            .service_url("https://us-south.iaas.cloud.ibm.com/v1/")
            .authenticator(Arc::new(NoAuthAuthenticator::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_url_substitutes_and_encodes() {
        let client = client();
        let url = render_url(
            &client,
            "/vpcs/{vpc_id}/routes/{id}",
            &[("vpc_id", "r006-a b".to_string()), ("id", "x/y".to_string())],
            &[("limit", "10".to_string())],
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://us-south.iaas.cloud.ibm.com/v1/vpcs/r006-a%20b/routes/x%2Fy?version=2020-11-17&generation=2&limit=10"
        );
    }

    #[test]
    fn test_render_url_dotted_query_names() {
        let client = client();
        let url = render_url(
            &client,
            "/subnets",
            &[],
            &[("resource_group.id", "fee82".to_string())],
        )
        .unwrap();

        assert_eq!(url.query(), Some("version=2020-11-17&generation=2&resource_group.id=fee82"));
    }

    #[test]
    fn test_empty_path_value_is_missing() {
        let client = client();
        let op = Operation::new(&client, "get_vpc", Method::GET, "/vpcs/{id}")
            .path("id", Some(String::new()));
        assert_eq!(op.missing, vec!["id"]);
    }

    #[test]
    fn test_merge_headers_replaces_by_name() {
        let mut target = HeaderMap::new();
        target.insert(ACCEPT, HeaderValue::from_static(JSON));
        target.insert("x-keep", HeaderValue::from_static("1"));

        let mut overrides = HeaderMap::new();
        overrides.append(ACCEPT, HeaderValue::from_static("text/csv"));
        overrides.append(ACCEPT, HeaderValue::from_static("text/plain"));
        merge_headers(&mut target, &overrides);

        let accept: Vec<_> = target.get_all(ACCEPT).iter().collect();
        assert_eq!(accept, vec!["text/csv", "text/plain"]);
        assert_eq!(target["x-keep"], "1");
    }

    #[test]
    fn test_analytics_value() {
        assert_eq!(
            analytics_value("list_vpcs"),
            "service_name=vpc;service_version=V1;operation_id=list_vpcs"
        );
    }
}
