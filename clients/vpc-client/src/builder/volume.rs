// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volumes and volume profiles

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    Volume, VolumeCollection, VolumePatch, VolumeProfile, VolumeProfileCollection, VolumePrototype,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all volume profiles
    ///
    /// Sends a `GET` request to `/volume/profiles`
    ///
    /// ```ignore
    /// let response = client.list_volume_profiles()
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_volume_profiles(&self) -> ListVolumeProfiles<'_> {
        ListVolumeProfiles::new(self)
    }

    /// Retrieve a volume profile
    ///
    /// Sends a `GET` request to `/volume/profiles/{name}`
    pub fn get_volume_profile(&self) -> GetVolumeProfile<'_> {
        GetVolumeProfile::new(self)
    }

    /// List all volumes
    ///
    /// Sends a `GET` request to `/volumes`
    ///
    /// ```ignore
    /// let response = client.list_volumes()
    ///    .start(start)
    ///    .limit(limit)
    ///    .name(name)
    ///    .zone_name(zone_name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_volumes(&self) -> ListVolumes<'_> {
        ListVolumes::new(self)
    }

    /// Create a volume
    ///
    /// Sends a `POST` request to `/volumes`
    ///
    /// ```ignore
    /// let response = client.create_volume()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_volume(&self) -> CreateVolume<'_> {
        CreateVolume::new(self)
    }

    /// Delete a volume
    ///
    /// Sends a `DELETE` request to `/volumes/{id}`
    pub fn delete_volume(&self) -> DeleteVolume<'_> {
        DeleteVolume::new(self)
    }

    /// Retrieve a volume
    ///
    /// Sends a `GET` request to `/volumes/{id}`
    pub fn get_volume(&self) -> GetVolume<'_> {
        GetVolume::new(self)
    }

    /// Update a volume
    ///
    /// Sends a `PATCH` request to `/volumes/{id}`
    ///
    /// ```ignore
    /// let response = client.update_volume()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_volume(&self) -> UpdateVolume<'_> {
        UpdateVolume::new(self)
    }
}

/// Builder for [`Client::list_volume_profiles`]
#[derive(Debug, Clone)]
pub struct ListVolumeProfiles<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListVolumeProfiles<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<VolumeProfileCollection>> {
        Operation::new(self.client, "list_volume_profiles", Method::GET, "/volume/profiles")
            .query("start", self.start)
            .query("limit", self.limit)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_volume_profile`]
#[derive(Debug, Clone)]
pub struct GetVolumeProfile<'a> {
    client: &'a Client,
    headers: HeaderMap,
    name: Option<String>,
}

impl<'a> GetVolumeProfile<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<VolumeProfile>> {
        Operation::new(self.client, "get_volume_profile", Method::GET, "/volume/profiles/{name}")
            .path("name", self.name)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_volumes`]
#[derive(Debug, Clone)]
pub struct ListVolumes<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    name: Option<String>,
    zone_name: Option<String>,
}

impl<'a> ListVolumes<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            name: None,
            zone_name: None,
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

    /// Only resources with this exact name
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Only resources in the zone with this name
    pub fn zone_name(mut self, value: impl Into<String>) -> Self {
        self.zone_name = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VolumeCollection>> {
        Operation::new(self.client, "list_volumes", Method::GET, "/volumes")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("name", self.name)
            .query("zone.name", self.zone_name)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_volume`]
#[derive(Debug, Clone)]
pub struct CreateVolume<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<VolumePrototype>,
}

impl<'a> CreateVolume<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: VolumePrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Volume>> {
        Operation::new(self.client, "create_volume", Method::POST, "/volumes")
            .required_json("body", self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_volume`]
#[derive(Debug, Clone)]
pub struct DeleteVolume<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteVolume<'a> {
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
        Operation::new(self.client, "delete_volume", Method::DELETE, "/volumes/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_volume`]
#[derive(Debug, Clone)]
pub struct GetVolume<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetVolume<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<Volume>> {
        Operation::new(self.client, "get_volume", Method::GET, "/volumes/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_volume`]
#[derive(Debug, Clone)]
pub struct UpdateVolume<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: VolumePatch,
}

impl<'a> UpdateVolume<'a> {
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
    pub fn body(mut self, value: VolumePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Volume>> {
        Operation::new(self.client, "update_volume", Method::PATCH, "/volumes/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

request_headers! {
    ListVolumeProfiles,
    GetVolumeProfile,
    ListVolumes,
    CreateVolume,
    DeleteVolume,
    GetVolume,
    UpdateVolume,
}
