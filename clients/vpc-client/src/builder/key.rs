// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SSH keys

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{Key, KeyCollection, KeyPatch, KeyPrototype, KeyType, ResourceGroupIdentity};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all keys
    ///
    /// Sends a `GET` request to `/keys`
    ///
    /// ```ignore
    /// let response = client.list_keys()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_keys(&self) -> ListKeys<'_> {
        ListKeys::new(self)
    }

    /// Create a key
    ///
    /// Sends a `POST` request to `/keys`
    ///
    /// ```ignore
    /// let response = client.create_key()
    ///    .public_key(public_key)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_key(&self) -> CreateKey<'_> {
        CreateKey::new(self)
    }

    /// Delete a key
    ///
    /// Sends a `DELETE` request to `/keys/{id}`
    pub fn delete_key(&self) -> DeleteKey<'_> {
        DeleteKey::new(self)
    }

    /// Retrieve a key
    ///
    /// Sends a `GET` request to `/keys/{id}`
    pub fn get_key(&self) -> GetKey<'_> {
        GetKey::new(self)
    }

    /// Update a key
    ///
    /// Sends a `PATCH` request to `/keys/{id}`
    ///
    /// ```ignore
    /// let response = client.update_key()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_key(&self) -> UpdateKey<'_> {
        UpdateKey::new(self)
    }
}

/// Builder for [`Client::list_keys`]
#[derive(Debug, Clone)]
pub struct ListKeys<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
}

impl<'a> ListKeys<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
        }
    }

    /// Page token taken from the `next` link of a previous page
    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    /// Number of resources to return on a page
    pub fn limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    /// Only resources in the resource group with this identifier
    pub fn resource_group_id(mut self, value: impl Into<String>) -> Self {
        self.resource_group_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<KeyCollection>> {
        Operation::new(self.client, "list_keys", Method::GET, "/keys")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_key`]
#[derive(Debug, Clone)]
pub struct CreateKey<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: KeyPrototype,
}

impl<'a> CreateKey<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn public_key(mut self, value: impl Into<String>) -> Self {
        self.body.public_key = Some(value.into());
        self
    }

    pub fn resource_group(mut self, value: ResourceGroupIdentity) -> Self {
        self.body.resource_group = Some(value);
        self
    }

    pub fn key_type(mut self, value: KeyType) -> Self {
        self.body.key_type = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: KeyPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Key>> {
        Operation::new(self.client, "create_key", Method::POST, "/keys")
            .require("public_key", self.body.public_key.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_key`]
#[derive(Debug, Clone)]
pub struct DeleteKey<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteKey<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(self.client, "delete_key", Method::DELETE, "/keys/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_key`]
#[derive(Debug, Clone)]
pub struct GetKey<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetKey<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Key>> {
        Operation::new(self.client, "get_key", Method::GET, "/keys/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_key`]
#[derive(Debug, Clone)]
pub struct UpdateKey<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: KeyPatch,
}

impl<'a> UpdateKey<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
            body: Default::default(),
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: KeyPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Key>> {
        Operation::new(self.client, "update_key", Method::PATCH, "/keys/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

request_headers! {
    ListKeys,
    CreateKey,
    DeleteKey,
    GetKey,
    UpdateKey,
}
