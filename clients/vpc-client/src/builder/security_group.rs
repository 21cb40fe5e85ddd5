// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Security groups, rules and network interface bindings

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    NetworkInterface, NetworkInterfaceCollection, ResourceGroupIdentity, SecurityGroup,
    SecurityGroupCollection, SecurityGroupPatch, SecurityGroupPrototype, SecurityGroupRule,
    SecurityGroupRuleCollection, SecurityGroupRulePatch, SecurityGroupRulePrototype, VpcIdentity,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all security groups
    ///
    /// Sends a `GET` request to `/security_groups`
    ///
    /// ```ignore
    /// let response = client.list_security_groups()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .vpc_id(vpc_id)
    ///    .vpc_crn(vpc_crn)
    ///    .vpc_name(vpc_name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_security_groups(&self) -> ListSecurityGroups<'_> {
        ListSecurityGroups::new(self)
    }

    /// Create a security group
    ///
    /// Sends a `POST` request to `/security_groups`
    ///
    /// ```ignore
    /// let response = client.create_security_group()
    ///    .vpc(vpc)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_security_group(&self) -> CreateSecurityGroup<'_> {
        CreateSecurityGroup::new(self)
    }

    /// Delete a security group
    ///
    /// Sends a `DELETE` request to `/security_groups/{id}`
    pub fn delete_security_group(&self) -> DeleteSecurityGroup<'_> {
        DeleteSecurityGroup::new(self)
    }

    /// Retrieve a security group
    ///
    /// Sends a `GET` request to `/security_groups/{id}`
    pub fn get_security_group(&self) -> GetSecurityGroup<'_> {
        GetSecurityGroup::new(self)
    }

    /// Update a security group
    ///
    /// Sends a `PATCH` request to `/security_groups/{id}`
    ///
    /// ```ignore
    /// let response = client.update_security_group()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_security_group(&self) -> UpdateSecurityGroup<'_> {
        UpdateSecurityGroup::new(self)
    }

    /// List a security group's network interfaces
    ///
    /// Sends a `GET` request to `/security_groups/{security_group_id}/network_interfaces`
    pub fn list_security_group_network_interfaces(&self) -> ListSecurityGroupNetworkInterfaces<'_> {
        ListSecurityGroupNetworkInterfaces::new(self)
    }

    /// Remove a network interface from a security group
    ///
    /// Sends a `DELETE` request to `/security_groups/{security_group_id}/network_interfaces/{id}`
    pub fn remove_security_group_network_interface(
        &self,
    ) -> RemoveSecurityGroupNetworkInterface<'_> {
        RemoveSecurityGroupNetworkInterface::new(self)
    }

    /// Retrieve a network interface in a security group
    ///
    /// Sends a `GET` request to `/security_groups/{security_group_id}/network_interfaces/{id}`
    pub fn get_security_group_network_interface(&self) -> GetSecurityGroupNetworkInterface<'_> {
        GetSecurityGroupNetworkInterface::new(self)
    }

    /// Add a network interface to a security group
    ///
    /// Sends a `PUT` request to `/security_groups/{security_group_id}/network_interfaces/{id}`
    pub fn add_security_group_network_interface(&self) -> AddSecurityGroupNetworkInterface<'_> {
        AddSecurityGroupNetworkInterface::new(self)
    }

    /// List all rules in a security group
    ///
    /// Sends a `GET` request to `/security_groups/{security_group_id}/rules`
    pub fn list_security_group_rules(&self) -> ListSecurityGroupRules<'_> {
        ListSecurityGroupRules::new(self)
    }

    /// Create a rule for a security group
    ///
    /// Sends a `POST` request to `/security_groups/{security_group_id}/rules`
    ///
    /// ```ignore
    /// let response = client.create_security_group_rule()
    ///    .security_group_id(security_group_id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_security_group_rule(&self) -> CreateSecurityGroupRule<'_> {
        CreateSecurityGroupRule::new(self)
    }

    /// Delete a security group rule
    ///
    /// Sends a `DELETE` request to `/security_groups/{security_group_id}/rules/{id}`
    pub fn delete_security_group_rule(&self) -> DeleteSecurityGroupRule<'_> {
        DeleteSecurityGroupRule::new(self)
    }

    /// Retrieve a security group rule
    ///
    /// Sends a `GET` request to `/security_groups/{security_group_id}/rules/{id}`
    pub fn get_security_group_rule(&self) -> GetSecurityGroupRule<'_> {
        GetSecurityGroupRule::new(self)
    }

    /// Update a security group rule
    ///
    /// Sends a `PATCH` request to `/security_groups/{security_group_id}/rules/{id}`
    ///
    /// ```ignore
    /// let response = client.update_security_group_rule()
    ///    .security_group_id(security_group_id)
    ///    .id(id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_security_group_rule(&self) -> UpdateSecurityGroupRule<'_> {
        UpdateSecurityGroupRule::new(self)
    }
}

/// Builder for [`Client::list_security_groups`]
#[derive(Debug, Clone)]
pub struct ListSecurityGroups<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
    vpc_id: Option<String>,
    vpc_crn: Option<String>,
    vpc_name: Option<String>,
}

impl<'a> ListSecurityGroups<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
            vpc_id: None,
            vpc_crn: None,
            vpc_name: None,
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

    /// Only resources in the VPC with this identifier
    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    /// Only resources in the VPC with this CRN
    pub fn vpc_crn(mut self, value: impl Into<String>) -> Self {
        self.vpc_crn = Some(value.into());
        self
    }

    /// Only resources in the VPC with this name
    pub fn vpc_name(mut self, value: impl Into<String>) -> Self {
        self.vpc_name = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<SecurityGroupCollection>> {
        Operation::new(self.client, "list_security_groups", Method::GET, "/security_groups")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .query("vpc.id", self.vpc_id)
            .query("vpc.crn", self.vpc_crn)
            .query("vpc.name", self.vpc_name)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_security_group`]
#[derive(Debug, Clone)]
pub struct CreateSecurityGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: SecurityGroupPrototype,
}

impl<'a> CreateSecurityGroup<'a> {
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

    pub fn resource_group(mut self, value: ResourceGroupIdentity) -> Self {
        self.body.resource_group = Some(value);
        self
    }

    pub fn rules(mut self, value: Vec<SecurityGroupRulePrototype>) -> Self {
        self.body.rules = Some(value);
        self
    }

    pub fn vpc(mut self, value: VpcIdentity) -> Self {
        self.body.vpc = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: SecurityGroupPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<SecurityGroup>> {
        Operation::new(self.client, "create_security_group", Method::POST, "/security_groups")
            .require("vpc", self.body.vpc.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_security_group`]
#[derive(Debug, Clone)]
pub struct DeleteSecurityGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteSecurityGroup<'a> {
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
        Operation::new(
            self.client,
            "delete_security_group",
            Method::DELETE,
            "/security_groups/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_security_group`]
#[derive(Debug, Clone)]
pub struct GetSecurityGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetSecurityGroup<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<SecurityGroup>> {
        Operation::new(self.client, "get_security_group", Method::GET, "/security_groups/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_security_group`]
#[derive(Debug, Clone)]
pub struct UpdateSecurityGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: SecurityGroupPatch,
}

impl<'a> UpdateSecurityGroup<'a> {
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
    pub fn body(mut self, value: SecurityGroupPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<SecurityGroup>> {
        Operation::new(self.client, "update_security_group", Method::PATCH, "/security_groups/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_security_group_network_interfaces`]
#[derive(Debug, Clone)]
pub struct ListSecurityGroupNetworkInterfaces<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
}

impl<'a> ListSecurityGroupNetworkInterfaces<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkInterfaceCollection>> {
        Operation::new(
            self.client,
            "list_security_group_network_interfaces",
            Method::GET,
            "/security_groups/{security_group_id}/network_interfaces",
        )
        .path("security_group_id", self.security_group_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::remove_security_group_network_interface`]
#[derive(Debug, Clone)]
pub struct RemoveSecurityGroupNetworkInterface<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> RemoveSecurityGroupNetworkInterface<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
            id: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "remove_security_group_network_interface",
            Method::DELETE,
            "/security_groups/{security_group_id}/network_interfaces/{id}",
        )
        .path("security_group_id", self.security_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_security_group_network_interface`]
#[derive(Debug, Clone)]
pub struct GetSecurityGroupNetworkInterface<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetSecurityGroupNetworkInterface<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
            id: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkInterface>> {
        Operation::new(
            self.client,
            "get_security_group_network_interface",
            Method::GET,
            "/security_groups/{security_group_id}/network_interfaces/{id}",
        )
        .path("security_group_id", self.security_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::add_security_group_network_interface`]
#[derive(Debug, Clone)]
pub struct AddSecurityGroupNetworkInterface<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> AddSecurityGroupNetworkInterface<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
            id: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkInterface>> {
        Operation::new(
            self.client,
            "add_security_group_network_interface",
            Method::PUT,
            "/security_groups/{security_group_id}/network_interfaces/{id}",
        )
        .path("security_group_id", self.security_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_security_group_rules`]
#[derive(Debug, Clone)]
pub struct ListSecurityGroupRules<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
}

impl<'a> ListSecurityGroupRules<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<SecurityGroupRuleCollection>> {
        Operation::new(
            self.client,
            "list_security_group_rules",
            Method::GET,
            "/security_groups/{security_group_id}/rules",
        )
        .path("security_group_id", self.security_group_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_security_group_rule`]
#[derive(Debug, Clone)]
pub struct CreateSecurityGroupRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
    body: Option<SecurityGroupRulePrototype>,
}

impl<'a> CreateSecurityGroupRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
            body: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub fn body(mut self, value: SecurityGroupRulePrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<SecurityGroupRule>> {
        Operation::new(
            self.client,
            "create_security_group_rule",
            Method::POST,
            "/security_groups/{security_group_id}/rules",
        )
        .path("security_group_id", self.security_group_id)
        .required_json("body", self.body.as_ref())
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_security_group_rule`]
#[derive(Debug, Clone)]
pub struct DeleteSecurityGroupRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteSecurityGroupRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
            id: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_security_group_rule",
            Method::DELETE,
            "/security_groups/{security_group_id}/rules/{id}",
        )
        .path("security_group_id", self.security_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_security_group_rule`]
#[derive(Debug, Clone)]
pub struct GetSecurityGroupRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetSecurityGroupRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
            id: None,
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<SecurityGroupRule>> {
        Operation::new(
            self.client,
            "get_security_group_rule",
            Method::GET,
            "/security_groups/{security_group_id}/rules/{id}",
        )
        .path("security_group_id", self.security_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_security_group_rule`]
#[derive(Debug, Clone)]
pub struct UpdateSecurityGroupRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    security_group_id: Option<String>,
    id: Option<String>,
    body: SecurityGroupRulePatch,
}

impl<'a> UpdateSecurityGroupRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            security_group_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: SecurityGroupRulePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<SecurityGroupRule>> {
        Operation::new(
            self.client,
            "update_security_group_rule",
            Method::PATCH,
            "/security_groups/{security_group_id}/rules/{id}",
        )
        .path("security_group_id", self.security_group_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListSecurityGroups,
    CreateSecurityGroup,
    DeleteSecurityGroup,
    GetSecurityGroup,
    UpdateSecurityGroup,
    ListSecurityGroupNetworkInterfaces,
    RemoveSecurityGroupNetworkInterface,
    GetSecurityGroupNetworkInterface,
    AddSecurityGroupNetworkInterface,
    ListSecurityGroupRules,
    CreateSecurityGroupRule,
    DeleteSecurityGroupRule,
    GetSecurityGroupRule,
    UpdateSecurityGroupRule,
}
