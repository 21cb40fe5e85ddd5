// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instances, instance profiles and instance templates

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    FloatingIp, FloatingIpUnpaginatedCollection, Instance, InstanceAction, InstanceActionPrototype,
    InstanceActionType, InstanceCollection, InstanceInitialization, InstancePatch, InstanceProfile,
    InstanceProfileCollection, InstancePrototype, InstanceTemplate, InstanceTemplateCollection,
    InstanceTemplatePatch, InstanceTemplatePrototype, NetworkInterface, NetworkInterfaceCollection,
    NetworkInterfacePatch, NetworkInterfacePrototype, SecurityGroupIdentity, SubnetIdentity,
    VolumeAttachment, VolumeAttachmentCollection, VolumeAttachmentPatch, VolumeAttachmentPrototype,
    VolumeAttachmentVolumePrototype,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all instance profiles
    ///
    /// Sends a `GET` request to `/instance/profiles`
    ///
    /// ```ignore
    /// let response = client.list_instance_profiles()
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_instance_profiles(&self) -> ListInstanceProfiles<'_> {
        ListInstanceProfiles::new(self)
    }

    /// Retrieve an instance profile
    ///
    /// Sends a `GET` request to `/instance/profiles/{name}`
    pub fn get_instance_profile(&self) -> GetInstanceProfile<'_> {
        GetInstanceProfile::new(self)
    }

    /// List all instance templates
    ///
    /// Sends a `GET` request to `/instance/templates`
    pub fn list_instance_templates(&self) -> ListInstanceTemplates<'_> {
        ListInstanceTemplates::new(self)
    }

    /// Create an instance template
    ///
    /// Sends a `POST` request to `/instance/templates`
    ///
    /// ```ignore
    /// let response = client.create_instance_template()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance_template(&self) -> CreateInstanceTemplate<'_> {
        CreateInstanceTemplate::new(self)
    }

    /// Delete an instance template
    ///
    /// Sends a `DELETE` request to `/instance/templates/{id}`
    pub fn delete_instance_template(&self) -> DeleteInstanceTemplate<'_> {
        DeleteInstanceTemplate::new(self)
    }

    /// Retrieve an instance template
    ///
    /// Sends a `GET` request to `/instance/templates/{id}`
    pub fn get_instance_template(&self) -> GetInstanceTemplate<'_> {
        GetInstanceTemplate::new(self)
    }

    /// Update an instance template
    ///
    /// Sends a `PATCH` request to `/instance/templates/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance_template()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance_template(&self) -> UpdateInstanceTemplate<'_> {
        UpdateInstanceTemplate::new(self)
    }

    /// List all instances
    ///
    /// Sends a `GET` request to `/instances`
    ///
    /// ```ignore
    /// let response = client.list_instances()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .name(name)
    ///    .vpc_id(vpc_id)
    ///    .vpc_crn(vpc_crn)
    ///    .vpc_name(vpc_name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_instances(&self) -> ListInstances<'_> {
        ListInstances::new(self)
    }

    /// Create an instance
    ///
    /// Sends a `POST` request to `/instances`
    ///
    /// ```ignore
    /// let response = client.create_instance()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance(&self) -> CreateInstance<'_> {
        CreateInstance::new(self)
    }

    /// Delete an instance
    ///
    /// Sends a `DELETE` request to `/instances/{id}`
    pub fn delete_instance(&self) -> DeleteInstance<'_> {
        DeleteInstance::new(self)
    }

    /// Retrieve an instance
    ///
    /// Sends a `GET` request to `/instances/{id}`
    pub fn get_instance(&self) -> GetInstance<'_> {
        GetInstance::new(self)
    }

    /// Update an instance
    ///
    /// Sends a `PATCH` request to `/instances/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance(&self) -> UpdateInstance<'_> {
        UpdateInstance::new(self)
    }

    /// Retrieve initialization configuration for an instance
    ///
    /// Sends a `GET` request to `/instances/{id}/initialization`
    pub fn get_instance_initialization(&self) -> GetInstanceInitialization<'_> {
        GetInstanceInitialization::new(self)
    }

    /// Create an instance action
    ///
    /// Sends a `POST` request to `/instances/{instance_id}/actions`
    ///
    /// ```ignore
    /// let response = client.create_instance_action()
    ///    .instance_id(instance_id)
    ///    .action_type(action_type)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance_action(&self) -> CreateInstanceAction<'_> {
        CreateInstanceAction::new(self)
    }

    /// List all network interfaces on an instance
    ///
    /// Sends a `GET` request to `/instances/{instance_id}/network_interfaces`
    pub fn list_instance_network_interfaces(&self) -> ListInstanceNetworkInterfaces<'_> {
        ListInstanceNetworkInterfaces::new(self)
    }

    /// Create a network interface on an instance
    ///
    /// Sends a `POST` request to `/instances/{instance_id}/network_interfaces`
    ///
    /// ```ignore
    /// let response = client.create_instance_network_interface()
    ///    .instance_id(instance_id)
    ///    .subnet(subnet)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance_network_interface(&self) -> CreateInstanceNetworkInterface<'_> {
        CreateInstanceNetworkInterface::new(self)
    }

    /// Delete a network interface
    ///
    /// Sends a `DELETE` request to `/instances/{instance_id}/network_interfaces/{id}`
    pub fn delete_instance_network_interface(&self) -> DeleteInstanceNetworkInterface<'_> {
        DeleteInstanceNetworkInterface::new(self)
    }

    /// Retrieve a network interface
    ///
    /// Sends a `GET` request to `/instances/{instance_id}/network_interfaces/{id}`
    pub fn get_instance_network_interface(&self) -> GetInstanceNetworkInterface<'_> {
        GetInstanceNetworkInterface::new(self)
    }

    /// Update a network interface
    ///
    /// Sends a `PATCH` request to `/instances/{instance_id}/network_interfaces/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance_network_interface()
    ///    .instance_id(instance_id)
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance_network_interface(&self) -> UpdateInstanceNetworkInterface<'_> {
        UpdateInstanceNetworkInterface::new(self)
    }

    /// List all floating IPs associated with a network interface
    ///
    /// Sends a `GET` request to `/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips`
    pub fn list_instance_network_interface_floating_ips(
        &self,
    ) -> ListInstanceNetworkInterfaceFloatingIps<'_> {
        ListInstanceNetworkInterfaceFloatingIps::new(self)
    }

    /// Disassociate a floating IP from a network interface
    ///
    /// Sends a `DELETE` request to `/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips/{id}`
    pub fn remove_instance_network_interface_floating_ip(
        &self,
    ) -> RemoveInstanceNetworkInterfaceFloatingIp<'_> {
        RemoveInstanceNetworkInterfaceFloatingIp::new(self)
    }

    /// Retrieve associated floating IP
    ///
    /// Sends a `GET` request to `/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips/{id}`
    pub fn get_instance_network_interface_floating_ip(
        &self,
    ) -> GetInstanceNetworkInterfaceFloatingIp<'_> {
        GetInstanceNetworkInterfaceFloatingIp::new(self)
    }

    /// Associate a floating IP with a network interface
    ///
    /// Sends a `PUT` request to `/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips/{id}`
    pub fn add_instance_network_interface_floating_ip(
        &self,
    ) -> AddInstanceNetworkInterfaceFloatingIp<'_> {
        AddInstanceNetworkInterfaceFloatingIp::new(self)
    }

    /// List all volumes attached to an instance
    ///
    /// Sends a `GET` request to `/instances/{instance_id}/volume_attachments`
    pub fn list_instance_volume_attachments(&self) -> ListInstanceVolumeAttachments<'_> {
        ListInstanceVolumeAttachments::new(self)
    }

    /// Create a volume attachment, connecting a volume to an instance
    ///
    /// Sends a `POST` request to `/instances/{instance_id}/volume_attachments`
    ///
    /// ```ignore
    /// let response = client.create_instance_volume_attachment()
    ///    .instance_id(instance_id)
    ///    .volume(volume)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance_volume_attachment(&self) -> CreateInstanceVolumeAttachment<'_> {
        CreateInstanceVolumeAttachment::new(self)
    }

    /// Delete a volume attachment, detaching a volume from an instance
    ///
    /// Sends a `DELETE` request to `/instances/{instance_id}/volume_attachments/{id}`
    pub fn delete_instance_volume_attachment(&self) -> DeleteInstanceVolumeAttachment<'_> {
        DeleteInstanceVolumeAttachment::new(self)
    }

    /// Retrieve a volume attachment
    ///
    /// Sends a `GET` request to `/instances/{instance_id}/volume_attachments/{id}`
    pub fn get_instance_volume_attachment(&self) -> GetInstanceVolumeAttachment<'_> {
        GetInstanceVolumeAttachment::new(self)
    }

    /// Update a volume attachment
    ///
    /// Sends a `PATCH` request to `/instances/{instance_id}/volume_attachments/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance_volume_attachment()
    ///    .instance_id(instance_id)
    ///    .id(id)
    ///    .delete_volume_on_instance_delete(delete_volume_on_instance_delete)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance_volume_attachment(&self) -> UpdateInstanceVolumeAttachment<'_> {
        UpdateInstanceVolumeAttachment::new(self)
    }
}

/// Builder for [`Client::list_instance_profiles`]
#[derive(Debug, Clone)]
pub struct ListInstanceProfiles<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListInstanceProfiles<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<InstanceProfileCollection>> {
        Operation::new(self.client, "list_instance_profiles", Method::GET, "/instance/profiles")
            .query("start", self.start)
            .query("limit", self.limit)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_instance_profile`]
#[derive(Debug, Clone)]
pub struct GetInstanceProfile<'a> {
    client: &'a Client,
    headers: HeaderMap,
    name: Option<String>,
}

impl<'a> GetInstanceProfile<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<InstanceProfile>> {
        Operation::new(
            self.client,
            "get_instance_profile",
            Method::GET,
            "/instance/profiles/{name}",
        )
        .path("name", self.name)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_instance_templates`]
#[derive(Debug, Clone)]
pub struct ListInstanceTemplates<'a> {
    client: &'a Client,
    headers: HeaderMap,
}

impl<'a> ListInstanceTemplates<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceTemplateCollection>> {
        Operation::new(self.client, "list_instance_templates", Method::GET, "/instance/templates")
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_instance_template`]
#[derive(Debug, Clone)]
pub struct CreateInstanceTemplate<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<InstanceTemplatePrototype>,
}

impl<'a> CreateInstanceTemplate<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: InstanceTemplatePrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceTemplate>> {
        Operation::new(self.client, "create_instance_template", Method::POST, "/instance/templates")
            .required_json("body", self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_instance_template`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceTemplate<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteInstanceTemplate<'a> {
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
            "delete_instance_template",
            Method::DELETE,
            "/instance/templates/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_template`]
#[derive(Debug, Clone)]
pub struct GetInstanceTemplate<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetInstanceTemplate<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<InstanceTemplate>> {
        Operation::new(
            self.client,
            "get_instance_template",
            Method::GET,
            "/instance/templates/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_instance_template`]
#[derive(Debug, Clone)]
pub struct UpdateInstanceTemplate<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: InstanceTemplatePatch,
}

impl<'a> UpdateInstanceTemplate<'a> {
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
    pub fn body(mut self, value: InstanceTemplatePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceTemplate>> {
        Operation::new(
            self.client,
            "update_instance_template",
            Method::PATCH,
            "/instance/templates/{id}",
        )
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_instances`]
#[derive(Debug, Clone)]
pub struct ListInstances<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
    name: Option<String>,
    vpc_id: Option<String>,
    vpc_crn: Option<String>,
    vpc_name: Option<String>,
}

impl<'a> ListInstances<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
            name: None,
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

    /// Only resources with this exact name
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
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

    pub async fn send(self) -> Result<ResponseValue<InstanceCollection>> {
        Operation::new(self.client, "list_instances", Method::GET, "/instances")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .query("name", self.name)
            .query("vpc.id", self.vpc_id)
            .query("vpc.crn", self.vpc_crn)
            .query("vpc.name", self.vpc_name)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_instance`]
#[derive(Debug, Clone)]
pub struct CreateInstance<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<InstancePrototype>,
}

impl<'a> CreateInstance<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: InstancePrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Instance>> {
        Operation::new(self.client, "create_instance", Method::POST, "/instances")
            .required_json("body", self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_instance`]
#[derive(Debug, Clone)]
pub struct DeleteInstance<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteInstance<'a> {
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
        Operation::new(self.client, "delete_instance", Method::DELETE, "/instances/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_instance`]
#[derive(Debug, Clone)]
pub struct GetInstance<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetInstance<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<Instance>> {
        Operation::new(self.client, "get_instance", Method::GET, "/instances/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_instance`]
#[derive(Debug, Clone)]
pub struct UpdateInstance<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: InstancePatch,
}

impl<'a> UpdateInstance<'a> {
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
    pub fn body(mut self, value: InstancePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Instance>> {
        Operation::new(self.client, "update_instance", Method::PATCH, "/instances/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_instance_initialization`]
#[derive(Debug, Clone)]
pub struct GetInstanceInitialization<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetInstanceInitialization<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<InstanceInitialization>> {
        Operation::new(
            self.client,
            "get_instance_initialization",
            Method::GET,
            "/instances/{id}/initialization",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_instance_action`]
#[derive(Debug, Clone)]
pub struct CreateInstanceAction<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    body: InstanceActionPrototype,
}

impl<'a> CreateInstanceAction<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            body: Default::default(),
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn force(mut self, value: bool) -> Self {
        self.body.force = Some(value);
        self
    }

    pub fn action_type(mut self, value: InstanceActionType) -> Self {
        self.body.action_type = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: InstanceActionPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceAction>> {
        Operation::new(
            self.client,
            "create_instance_action",
            Method::POST,
            "/instances/{instance_id}/actions",
        )
        .path("instance_id", self.instance_id)
        .require("type", self.body.action_type.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_instance_network_interfaces`]
#[derive(Debug, Clone)]
pub struct ListInstanceNetworkInterfaces<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
}

impl<'a> ListInstanceNetworkInterfaces<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkInterfaceCollection>> {
        Operation::new(
            self.client,
            "list_instance_network_interfaces",
            Method::GET,
            "/instances/{instance_id}/network_interfaces",
        )
        .path("instance_id", self.instance_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_instance_network_interface`]
#[derive(Debug, Clone)]
pub struct CreateInstanceNetworkInterface<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    body: NetworkInterfacePrototype,
}

impl<'a> CreateInstanceNetworkInterface<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            body: Default::default(),
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn primary_ipv4_address(mut self, value: impl Into<String>) -> Self {
        self.body.primary_ipv4_address = Some(value.into());
        self
    }

    pub fn security_groups(mut self, value: Vec<SecurityGroupIdentity>) -> Self {
        self.body.security_groups = Some(value);
        self
    }

    pub fn subnet(mut self, value: SubnetIdentity) -> Self {
        self.body.subnet = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: NetworkInterfacePrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkInterface>> {
        Operation::new(
            self.client,
            "create_instance_network_interface",
            Method::POST,
            "/instances/{instance_id}/network_interfaces",
        )
        .path("instance_id", self.instance_id)
        .require("subnet", self.body.subnet.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_instance_network_interface`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceNetworkInterface<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteInstanceNetworkInterface<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_network_interface",
            Method::DELETE,
            "/instances/{instance_id}/network_interfaces/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_network_interface`]
#[derive(Debug, Clone)]
pub struct GetInstanceNetworkInterface<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetInstanceNetworkInterface<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkInterface>> {
        Operation::new(
            self.client,
            "get_instance_network_interface",
            Method::GET,
            "/instances/{instance_id}/network_interfaces/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_instance_network_interface`]
#[derive(Debug, Clone)]
pub struct UpdateInstanceNetworkInterface<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    id: Option<String>,
    body: NetworkInterfacePatch,
}

impl<'a> UpdateInstanceNetworkInterface<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
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
    pub fn body(mut self, value: NetworkInterfacePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkInterface>> {
        Operation::new(
            self.client,
            "update_instance_network_interface",
            Method::PATCH,
            "/instances/{instance_id}/network_interfaces/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_instance_network_interface_floating_ips`]
#[derive(Debug, Clone)]
pub struct ListInstanceNetworkInterfaceFloatingIps<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    network_interface_id: Option<String>,
}

impl<'a> ListInstanceNetworkInterfaceFloatingIps<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            network_interface_id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn network_interface_id(mut self, value: impl Into<String>) -> Self {
        self.network_interface_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FloatingIpUnpaginatedCollection>> {
        Operation::new(
            self.client,
            "list_instance_network_interface_floating_ips",
            Method::GET,
            "/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips",
        )
        .path("instance_id", self.instance_id)
        .path("network_interface_id", self.network_interface_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::remove_instance_network_interface_floating_ip`]
#[derive(Debug, Clone)]
pub struct RemoveInstanceNetworkInterfaceFloatingIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    network_interface_id: Option<String>,
    id: Option<String>,
}

impl<'a> RemoveInstanceNetworkInterfaceFloatingIp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            network_interface_id: None,
            id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn network_interface_id(mut self, value: impl Into<String>) -> Self {
        self.network_interface_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "remove_instance_network_interface_floating_ip",
            Method::DELETE,
            "/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("network_interface_id", self.network_interface_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_network_interface_floating_ip`]
#[derive(Debug, Clone)]
pub struct GetInstanceNetworkInterfaceFloatingIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    network_interface_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetInstanceNetworkInterfaceFloatingIp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            network_interface_id: None,
            id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn network_interface_id(mut self, value: impl Into<String>) -> Self {
        self.network_interface_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FloatingIp>> {
        Operation::new(
            self.client,
            "get_instance_network_interface_floating_ip",
            Method::GET,
            "/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("network_interface_id", self.network_interface_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::add_instance_network_interface_floating_ip`]
#[derive(Debug, Clone)]
pub struct AddInstanceNetworkInterfaceFloatingIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    network_interface_id: Option<String>,
    id: Option<String>,
}

impl<'a> AddInstanceNetworkInterfaceFloatingIp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            network_interface_id: None,
            id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn network_interface_id(mut self, value: impl Into<String>) -> Self {
        self.network_interface_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FloatingIp>> {
        Operation::new(
            self.client,
            "add_instance_network_interface_floating_ip",
            Method::PUT,
            "/instances/{instance_id}/network_interfaces/{network_interface_id}/floating_ips/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("network_interface_id", self.network_interface_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_instance_volume_attachments`]
#[derive(Debug, Clone)]
pub struct ListInstanceVolumeAttachments<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
}

impl<'a> ListInstanceVolumeAttachments<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VolumeAttachmentCollection>> {
        Operation::new(
            self.client,
            "list_instance_volume_attachments",
            Method::GET,
            "/instances/{instance_id}/volume_attachments",
        )
        .path("instance_id", self.instance_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_instance_volume_attachment`]
#[derive(Debug, Clone)]
pub struct CreateInstanceVolumeAttachment<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    body: VolumeAttachmentPrototype,
}

impl<'a> CreateInstanceVolumeAttachment<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            body: Default::default(),
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn delete_volume_on_instance_delete(mut self, value: bool) -> Self {
        self.body.delete_volume_on_instance_delete = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn volume(mut self, value: VolumeAttachmentVolumePrototype) -> Self {
        self.body.volume = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: VolumeAttachmentPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VolumeAttachment>> {
        Operation::new(
            self.client,
            "create_instance_volume_attachment",
            Method::POST,
            "/instances/{instance_id}/volume_attachments",
        )
        .path("instance_id", self.instance_id)
        .require("volume", self.body.volume.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_instance_volume_attachment`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceVolumeAttachment<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteInstanceVolumeAttachment<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_volume_attachment",
            Method::DELETE,
            "/instances/{instance_id}/volume_attachments/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_volume_attachment`]
#[derive(Debug, Clone)]
pub struct GetInstanceVolumeAttachment<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetInstanceVolumeAttachment<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            id: None,
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VolumeAttachment>> {
        Operation::new(
            self.client,
            "get_instance_volume_attachment",
            Method::GET,
            "/instances/{instance_id}/volume_attachments/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_instance_volume_attachment`]
#[derive(Debug, Clone)]
pub struct UpdateInstanceVolumeAttachment<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_id: Option<String>,
    id: Option<String>,
    body: VolumeAttachmentPatch,
}

impl<'a> UpdateInstanceVolumeAttachment<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn delete_volume_on_instance_delete(mut self, value: bool) -> Self {
        self.body.delete_volume_on_instance_delete = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: VolumeAttachmentPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VolumeAttachment>> {
        Operation::new(
            self.client,
            "update_instance_volume_attachment",
            Method::PATCH,
            "/instances/{instance_id}/volume_attachments/{id}",
        )
        .path("instance_id", self.instance_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListInstanceProfiles,
    GetInstanceProfile,
    ListInstanceTemplates,
    CreateInstanceTemplate,
    DeleteInstanceTemplate,
    GetInstanceTemplate,
    UpdateInstanceTemplate,
    ListInstances,
    CreateInstance,
    DeleteInstance,
    GetInstance,
    UpdateInstance,
    GetInstanceInitialization,
    CreateInstanceAction,
    ListInstanceNetworkInterfaces,
    CreateInstanceNetworkInterface,
    DeleteInstanceNetworkInterface,
    GetInstanceNetworkInterface,
    UpdateInstanceNetworkInterface,
    ListInstanceNetworkInterfaceFloatingIps,
    RemoveInstanceNetworkInterfaceFloatingIp,
    GetInstanceNetworkInterfaceFloatingIp,
    AddInstanceNetworkInterfaceFloatingIp,
    ListInstanceVolumeAttachments,
    CreateInstanceVolumeAttachment,
    DeleteInstanceVolumeAttachment,
    GetInstanceVolumeAttachment,
    UpdateInstanceVolumeAttachment,
}
