// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Regions and zones

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{Region, RegionCollection, Zone, ZoneCollection};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all regions
    ///
    /// Sends a `GET` request to `/regions`
    pub fn list_regions(&self) -> ListRegions<'_> {
        ListRegions::new(self)
    }

    /// Retrieve a region
    ///
    /// Sends a `GET` request to `/regions/{name}`
    pub fn get_region(&self) -> GetRegion<'_> {
        GetRegion::new(self)
    }

    /// List all zones in a region
    ///
    /// Sends a `GET` request to `/regions/{region_name}/zones`
    pub fn list_region_zones(&self) -> ListRegionZones<'_> {
        ListRegionZones::new(self)
    }

    /// Retrieve a zone
    ///
    /// Sends a `GET` request to `/regions/{region_name}/zones/{name}`
    pub fn get_region_zone(&self) -> GetRegionZone<'_> {
        GetRegionZone::new(self)
    }
}

/// Builder for [`Client::list_regions`]
#[derive(Debug, Clone)]
pub struct ListRegions<'a> {
    client: &'a Client,
    headers: HeaderMap,
}

impl<'a> ListRegions<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }

    pub async fn send(self) -> Result<ResponseValue<RegionCollection>> {
        Operation::new(self.client, "list_regions", Method::GET, "/regions")
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_region`]
#[derive(Debug, Clone)]
pub struct GetRegion<'a> {
    client: &'a Client,
    headers: HeaderMap,
    name: Option<String>,
}

impl<'a> GetRegion<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<Region>> {
        Operation::new(self.client, "get_region", Method::GET, "/regions/{name}")
            .path("name", self.name)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_region_zones`]
#[derive(Debug, Clone)]
pub struct ListRegionZones<'a> {
    client: &'a Client,
    headers: HeaderMap,
    region_name: Option<String>,
}

impl<'a> ListRegionZones<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            region_name: None,
        }
    }

    pub fn region_name(mut self, value: impl Into<String>) -> Self {
        self.region_name = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<ZoneCollection>> {
        Operation::new(
            self.client,
            "list_region_zones",
            Method::GET,
            "/regions/{region_name}/zones",
        )
        .path("region_name", self.region_name)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::get_region_zone`]
#[derive(Debug, Clone)]
pub struct GetRegionZone<'a> {
    client: &'a Client,
    headers: HeaderMap,
    region_name: Option<String>,
    name: Option<String>,
}

impl<'a> GetRegionZone<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            region_name: None,
            name: None,
        }
    }

    pub fn region_name(mut self, value: impl Into<String>) -> Self {
        self.region_name = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Zone>> {
        Operation::new(
            self.client,
            "get_region_zone",
            Method::GET,
            "/regions/{region_name}/zones/{name}",
        )
        .path("region_name", self.region_name)
        .path("name", self.name)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListRegions,
    GetRegion,
    ListRegionZones,
    GetRegionZone,
}
