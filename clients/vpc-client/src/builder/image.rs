// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Images and operating systems

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    Image, ImageCollection, ImagePatch, ImagePrototype, ImageVisibility, OperatingSystem,
    OperatingSystemCollection,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all images
    ///
    /// Sends a `GET` request to `/images`
    ///
    /// ```ignore
    /// let response = client.list_images()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .name(name)
    ///    .visibility(visibility)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_images(&self) -> ListImages<'_> {
        ListImages::new(self)
    }

    /// Create an image
    ///
    /// Sends a `POST` request to `/images`
    ///
    /// ```ignore
    /// let response = client.create_image()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_image(&self) -> CreateImage<'_> {
        CreateImage::new(self)
    }

    /// Delete an image
    ///
    /// Sends a `DELETE` request to `/images/{id}`
    pub fn delete_image(&self) -> DeleteImage<'_> {
        DeleteImage::new(self)
    }

    /// Retrieve an image
    ///
    /// Sends a `GET` request to `/images/{id}`
    pub fn get_image(&self) -> GetImage<'_> {
        GetImage::new(self)
    }

    /// Update an image
    ///
    /// Sends a `PATCH` request to `/images/{id}`
    ///
    /// ```ignore
    /// let response = client.update_image()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_image(&self) -> UpdateImage<'_> {
        UpdateImage::new(self)
    }

    /// List all operating systems
    ///
    /// Sends a `GET` request to `/operating_systems`
    ///
    /// ```ignore
    /// let response = client.list_operating_systems()
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_operating_systems(&self) -> ListOperatingSystems<'_> {
        ListOperatingSystems::new(self)
    }

    /// Retrieve an operating system
    ///
    /// Sends a `GET` request to `/operating_systems/{name}`
    pub fn get_operating_system(&self) -> GetOperatingSystem<'_> {
        GetOperatingSystem::new(self)
    }
}

/// Builder for [`Client::list_images`]
#[derive(Debug, Clone)]
pub struct ListImages<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
    name: Option<String>,
    visibility: Option<ImageVisibility>,
}

impl<'a> ListImages<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
            name: None,
            visibility: None,
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

    /// Only resources with this exact name
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn visibility(mut self, value: ImageVisibility) -> Self {
        self.visibility = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<ImageCollection>> {
        Operation::new(self.client, "list_images", Method::GET, "/images")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .query("name", self.name)
            .query("visibility", self.visibility)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_image`]
#[derive(Debug, Clone)]
pub struct CreateImage<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<ImagePrototype>,
}

impl<'a> CreateImage<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: ImagePrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Image>> {
        Operation::new(self.client, "create_image", Method::POST, "/images")
            .required_json("body", self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_image`]
#[derive(Debug, Clone)]
pub struct DeleteImage<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteImage<'a> {
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
        Operation::new(self.client, "delete_image", Method::DELETE, "/images/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_image`]
#[derive(Debug, Clone)]
pub struct GetImage<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetImage<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<Image>> {
        Operation::new(self.client, "get_image", Method::GET, "/images/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_image`]
#[derive(Debug, Clone)]
pub struct UpdateImage<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: ImagePatch,
}

impl<'a> UpdateImage<'a> {
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
    pub fn body(mut self, value: ImagePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Image>> {
        Operation::new(self.client, "update_image", Method::PATCH, "/images/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_operating_systems`]
#[derive(Debug, Clone)]
pub struct ListOperatingSystems<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListOperatingSystems<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
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

    pub async fn send(self) -> Result<ResponseValue<OperatingSystemCollection>> {
        Operation::new(self.client, "list_operating_systems", Method::GET, "/operating_systems")
            .query("start", self.start)
            .query("limit", self.limit)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_operating_system`]
#[derive(Debug, Clone)]
pub struct GetOperatingSystem<'a> {
    client: &'a Client,
    headers: HeaderMap,
    name: Option<String>,
}

impl<'a> GetOperatingSystem<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            name: None,
        }
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<OperatingSystem>> {
        Operation::new(
            self.client,
            "get_operating_system",
            Method::GET,
            "/operating_systems/{name}",
        )
        .path("name", self.name)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListImages,
    CreateImage,
    DeleteImage,
    GetImage,
    UpdateImage,
    ListOperatingSystems,
    GetOperatingSystem,
}
