// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Load balancers, listeners, policies, pools and members

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    Identity, ListenerPolicyAction, ListenerPolicyTarget, LoadBalancer, LoadBalancerCollection,
    LoadBalancerListener, LoadBalancerListenerCollection, LoadBalancerListenerPatch,
    LoadBalancerListenerPolicy, LoadBalancerListenerPolicyCollection,
    LoadBalancerListenerPolicyPatch, LoadBalancerListenerPolicyPrototype,
    LoadBalancerListenerPolicyRule, LoadBalancerListenerPolicyRuleCollection,
    LoadBalancerListenerPolicyRulePatch, LoadBalancerListenerPolicyRulePrototype,
    LoadBalancerListenerPrototype, LoadBalancerListenerPrototypeLoadBalancerContext,
    LoadBalancerLogging, LoadBalancerPatch, LoadBalancerPool, LoadBalancerPoolCollection,
    LoadBalancerPoolHealthMonitor, LoadBalancerPoolMember, LoadBalancerPoolMemberCollection,
    LoadBalancerPoolMemberPatch, LoadBalancerPoolMemberPrototype, LoadBalancerPoolMemberTarget,
    LoadBalancerPoolMembersReplacement, LoadBalancerPoolPatch, LoadBalancerPoolPrototype,
    LoadBalancerPoolSessionPersistence, LoadBalancerProfile, LoadBalancerProfileCollection,
    LoadBalancerProtocol, LoadBalancerPrototype, LoadBalancerStatistics, NamedIdentity,
    PolicyRuleCondition, PolicyRuleType, PoolAlgorithm, ResourceGroupIdentity, SubnetIdentity,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all load balancer profiles
    ///
    /// Sends a `GET` request to `/load_balancers/profiles`
    ///
    /// ```ignore
    /// let response = client.list_load_balancer_profiles()
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_load_balancer_profiles(&self) -> ListLoadBalancerProfiles<'_> {
        ListLoadBalancerProfiles::new(self)
    }

    /// Retrieve a load balancer profile
    ///
    /// Sends a `GET` request to `/load_balancers/profiles/{name}`
    pub fn get_load_balancer_profile(&self) -> GetLoadBalancerProfile<'_> {
        GetLoadBalancerProfile::new(self)
    }

    /// List all load balancers
    ///
    /// Sends a `GET` request to `/load_balancers`
    pub fn list_load_balancers(&self) -> ListLoadBalancers<'_> {
        ListLoadBalancers::new(self)
    }

    /// Create a load balancer
    ///
    /// Sends a `POST` request to `/load_balancers`
    ///
    /// ```ignore
    /// let response = client.create_load_balancer()
    ///    .is_public(is_public)
    ///    .subnets(subnets)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_load_balancer(&self) -> CreateLoadBalancer<'_> {
        CreateLoadBalancer::new(self)
    }

    /// Delete a load balancer
    ///
    /// Sends a `DELETE` request to `/load_balancers/{id}`
    pub fn delete_load_balancer(&self) -> DeleteLoadBalancer<'_> {
        DeleteLoadBalancer::new(self)
    }

    /// Retrieve a load balancer
    ///
    /// Sends a `GET` request to `/load_balancers/{id}`
    pub fn get_load_balancer(&self) -> GetLoadBalancer<'_> {
        GetLoadBalancer::new(self)
    }

    /// Update a load balancer
    ///
    /// Sends a `PATCH` request to `/load_balancers/{id}`
    ///
    /// ```ignore
    /// let response = client.update_load_balancer()
    ///    .id(id)
    ///    .logging(logging)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_load_balancer(&self) -> UpdateLoadBalancer<'_> {
        UpdateLoadBalancer::new(self)
    }

    /// List statistics of a load balancer
    ///
    /// Sends a `GET` request to `/load_balancers/{id}/statistics`
    pub fn get_load_balancer_statistics(&self) -> GetLoadBalancerStatistics<'_> {
        GetLoadBalancerStatistics::new(self)
    }

    /// List all listeners for a load balancer
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/listeners`
    pub fn list_load_balancer_listeners(&self) -> ListLoadBalancerListeners<'_> {
        ListLoadBalancerListeners::new(self)
    }

    /// Create a listener for a load balancer
    ///
    /// Sends a `POST` request to `/load_balancers/{load_balancer_id}/listeners`
    ///
    /// ```ignore
    /// let response = client.create_load_balancer_listener()
    ///    .load_balancer_id(load_balancer_id)
    ///    .port(port)
    ///    .protocol(protocol)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_load_balancer_listener(&self) -> CreateLoadBalancerListener<'_> {
        CreateLoadBalancerListener::new(self)
    }

    /// Delete a load balancer listener
    ///
    /// Sends a `DELETE` request to `/load_balancers/{load_balancer_id}/listeners/{id}`
    pub fn delete_load_balancer_listener(&self) -> DeleteLoadBalancerListener<'_> {
        DeleteLoadBalancerListener::new(self)
    }

    /// Retrieve a load balancer listener
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/listeners/{id}`
    pub fn get_load_balancer_listener(&self) -> GetLoadBalancerListener<'_> {
        GetLoadBalancerListener::new(self)
    }

    /// Update a load balancer listener
    ///
    /// Sends a `PATCH` request to `/load_balancers/{load_balancer_id}/listeners/{id}`
    ///
    /// ```ignore
    /// let response = client.update_load_balancer_listener()
    ///    .load_balancer_id(load_balancer_id)
    ///    .id(id)
    ///    .certificate_instance(certificate_instance)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_load_balancer_listener(&self) -> UpdateLoadBalancerListener<'_> {
        UpdateLoadBalancerListener::new(self)
    }

    /// List all policies for a load balancer listener
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies`
    pub fn list_load_balancer_listener_policies(&self) -> ListLoadBalancerListenerPolicies<'_> {
        ListLoadBalancerListenerPolicies::new(self)
    }

    /// Create a policy for a load balancer listener
    ///
    /// Sends a `POST` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies`
    ///
    /// ```ignore
    /// let response = client.create_load_balancer_listener_policy()
    ///    .load_balancer_id(load_balancer_id)
    ///    .listener_id(listener_id)
    ///    .action(action)
    ///    .priority(priority)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_load_balancer_listener_policy(&self) -> CreateLoadBalancerListenerPolicy<'_> {
        CreateLoadBalancerListenerPolicy::new(self)
    }

    /// Delete a load balancer listener policy
    ///
    /// Sends a `DELETE` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{id}`
    pub fn delete_load_balancer_listener_policy(&self) -> DeleteLoadBalancerListenerPolicy<'_> {
        DeleteLoadBalancerListenerPolicy::new(self)
    }

    /// Retrieve a load balancer listener policy
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{id}`
    pub fn get_load_balancer_listener_policy(&self) -> GetLoadBalancerListenerPolicy<'_> {
        GetLoadBalancerListenerPolicy::new(self)
    }

    /// Update a load balancer listener policy
    ///
    /// Sends a `PATCH` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{id}`
    ///
    /// ```ignore
    /// let response = client.update_load_balancer_listener_policy()
    ///    .load_balancer_id(load_balancer_id)
    ///    .listener_id(listener_id)
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_load_balancer_listener_policy(&self) -> UpdateLoadBalancerListenerPolicy<'_> {
        UpdateLoadBalancerListenerPolicy::new(self)
    }

    /// List all rules of a load balancer listener policy
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules`
    pub fn list_load_balancer_listener_policy_rules(
        &self,
    ) -> ListLoadBalancerListenerPolicyRules<'_> {
        ListLoadBalancerListenerPolicyRules::new(self)
    }

    /// Create a rule for a load balancer listener policy
    ///
    /// Sends a `POST` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules`
    ///
    /// ```ignore
    /// let response = client.create_load_balancer_listener_policy_rule()
    ///    .load_balancer_id(load_balancer_id)
    ///    .listener_id(listener_id)
    ///    .policy_id(policy_id)
    ///    .condition(condition)
    ///    .rule_type(rule_type)
    ///    .value(value)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_load_balancer_listener_policy_rule(
        &self,
    ) -> CreateLoadBalancerListenerPolicyRule<'_> {
        CreateLoadBalancerListenerPolicyRule::new(self)
    }

    /// Delete a load balancer listener policy rule
    ///
    /// Sends a `DELETE` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules/{id}`
    pub fn delete_load_balancer_listener_policy_rule(
        &self,
    ) -> DeleteLoadBalancerListenerPolicyRule<'_> {
        DeleteLoadBalancerListenerPolicyRule::new(self)
    }

    /// Retrieve a load balancer listener policy rule
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules/{id}`
    pub fn get_load_balancer_listener_policy_rule(&self) -> GetLoadBalancerListenerPolicyRule<'_> {
        GetLoadBalancerListenerPolicyRule::new(self)
    }

    /// Update a load balancer listener policy rule
    ///
    /// Sends a `PATCH` request to `/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules/{id}`
    ///
    /// ```ignore
    /// let response = client.update_load_balancer_listener_policy_rule()
    ///    .load_balancer_id(load_balancer_id)
    ///    .listener_id(listener_id)
    ///    .policy_id(policy_id)
    ///    .id(id)
    ///    .condition(condition)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_load_balancer_listener_policy_rule(
        &self,
    ) -> UpdateLoadBalancerListenerPolicyRule<'_> {
        UpdateLoadBalancerListenerPolicyRule::new(self)
    }

    /// List all pools of a load balancer
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/pools`
    pub fn list_load_balancer_pools(&self) -> ListLoadBalancerPools<'_> {
        ListLoadBalancerPools::new(self)
    }

    /// Create a load balancer pool
    ///
    /// Sends a `POST` request to `/load_balancers/{load_balancer_id}/pools`
    ///
    /// ```ignore
    /// let response = client.create_load_balancer_pool()
    ///    .load_balancer_id(load_balancer_id)
    ///    .algorithm(algorithm)
    ///    .health_monitor(health_monitor)
    ///    .protocol(protocol)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_load_balancer_pool(&self) -> CreateLoadBalancerPool<'_> {
        CreateLoadBalancerPool::new(self)
    }

    /// Delete a pool
    ///
    /// Sends a `DELETE` request to `/load_balancers/{load_balancer_id}/pools/{id}`
    pub fn delete_load_balancer_pool(&self) -> DeleteLoadBalancerPool<'_> {
        DeleteLoadBalancerPool::new(self)
    }

    /// Retrieve a load balancer pool
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/pools/{id}`
    pub fn get_load_balancer_pool(&self) -> GetLoadBalancerPool<'_> {
        GetLoadBalancerPool::new(self)
    }

    /// Update a load balancer pool
    ///
    /// Sends a `PATCH` request to `/load_balancers/{load_balancer_id}/pools/{id}`
    ///
    /// ```ignore
    /// let response = client.update_load_balancer_pool()
    ///    .load_balancer_id(load_balancer_id)
    ///    .id(id)
    ///    .algorithm(algorithm)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_load_balancer_pool(&self) -> UpdateLoadBalancerPool<'_> {
        UpdateLoadBalancerPool::new(self)
    }

    /// List all members of a load balancer pool
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/pools/{pool_id}/members`
    pub fn list_load_balancer_pool_members(&self) -> ListLoadBalancerPoolMembers<'_> {
        ListLoadBalancerPoolMembers::new(self)
    }

    /// Create a member in a load balancer pool
    ///
    /// Sends a `POST` request to `/load_balancers/{load_balancer_id}/pools/{pool_id}/members`
    ///
    /// ```ignore
    /// let response = client.create_load_balancer_pool_member()
    ///    .load_balancer_id(load_balancer_id)
    ///    .pool_id(pool_id)
    ///    .port(port)
    ///    .target(target)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_load_balancer_pool_member(&self) -> CreateLoadBalancerPoolMember<'_> {
        CreateLoadBalancerPoolMember::new(self)
    }

    /// Update members of a load balancer pool
    ///
    /// Sends a `PUT` request to `/load_balancers/{load_balancer_id}/pools/{pool_id}/members`
    ///
    /// ```ignore
    /// let response = client.replace_load_balancer_pool_members()
    ///    .load_balancer_id(load_balancer_id)
    ///    .pool_id(pool_id)
    ///    .members(members)
    ///    .send()
    ///    .await;
    /// ```
    pub fn replace_load_balancer_pool_members(&self) -> ReplaceLoadBalancerPoolMembers<'_> {
        ReplaceLoadBalancerPoolMembers::new(self)
    }

    /// Delete a member from a load balancer pool
    ///
    /// Sends a `DELETE` request to `/load_balancers/{load_balancer_id}/pools/{pool_id}/members/{id}`
    pub fn delete_load_balancer_pool_member(&self) -> DeleteLoadBalancerPoolMember<'_> {
        DeleteLoadBalancerPoolMember::new(self)
    }

    /// Retrieve a member in a load balancer pool
    ///
    /// Sends a `GET` request to `/load_balancers/{load_balancer_id}/pools/{pool_id}/members/{id}`
    pub fn get_load_balancer_pool_member(&self) -> GetLoadBalancerPoolMember<'_> {
        GetLoadBalancerPoolMember::new(self)
    }

    /// Update a member in a load balancer pool
    ///
    /// Sends a `PATCH` request to `/load_balancers/{load_balancer_id}/pools/{pool_id}/members/{id}`
    ///
    /// ```ignore
    /// let response = client.update_load_balancer_pool_member()
    ///    .load_balancer_id(load_balancer_id)
    ///    .pool_id(pool_id)
    ///    .id(id)
    ///    .port(port)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_load_balancer_pool_member(&self) -> UpdateLoadBalancerPoolMember<'_> {
        UpdateLoadBalancerPoolMember::new(self)
    }
}

/// Builder for [`Client::list_load_balancer_profiles`]
#[derive(Debug, Clone)]
pub struct ListLoadBalancerProfiles<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListLoadBalancerProfiles<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerProfileCollection>> {
        Operation::new(
            self.client,
            "list_load_balancer_profiles",
            Method::GET,
            "/load_balancers/profiles",
        )
        .query("start", self.start)
        .query("limit", self.limit)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::get_load_balancer_profile`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancerProfile<'a> {
    client: &'a Client,
    headers: HeaderMap,
    name: Option<String>,
}

impl<'a> GetLoadBalancerProfile<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerProfile>> {
        Operation::new(
            self.client,
            "get_load_balancer_profile",
            Method::GET,
            "/load_balancers/profiles/{name}",
        )
        .path("name", self.name)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_load_balancers`]
#[derive(Debug, Clone)]
pub struct ListLoadBalancers<'a> {
    client: &'a Client,
    headers: HeaderMap,
}

impl<'a> ListLoadBalancers<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerCollection>> {
        Operation::new(self.client, "list_load_balancers", Method::GET, "/load_balancers")
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_load_balancer`]
#[derive(Debug, Clone)]
pub struct CreateLoadBalancer<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: LoadBalancerPrototype,
}

impl<'a> CreateLoadBalancer<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn is_public(mut self, value: bool) -> Self {
        self.body.is_public = Some(value);
        self
    }

    pub fn listeners(
        mut self,
        value: Vec<LoadBalancerListenerPrototypeLoadBalancerContext>,
    ) -> Self {
        self.body.listeners = Some(value);
        self
    }

    pub fn logging(mut self, value: LoadBalancerLogging) -> Self {
        self.body.logging = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn pools(mut self, value: Vec<LoadBalancerPoolPrototype>) -> Self {
        self.body.pools = Some(value);
        self
    }

    pub fn profile(mut self, value: NamedIdentity) -> Self {
        self.body.profile = Some(value);
        self
    }

    pub fn resource_group(mut self, value: ResourceGroupIdentity) -> Self {
        self.body.resource_group = Some(value);
        self
    }

    pub fn subnets(mut self, value: Vec<SubnetIdentity>) -> Self {
        self.body.subnets = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancer>> {
        Operation::new(self.client, "create_load_balancer", Method::POST, "/load_balancers")
            .require("is_public", self.body.is_public.is_some())
            .require("subnets", self.body.subnets.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_load_balancer`]
#[derive(Debug, Clone)]
pub struct DeleteLoadBalancer<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteLoadBalancer<'a> {
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
        Operation::new(self.client, "delete_load_balancer", Method::DELETE, "/load_balancers/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_load_balancer`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancer<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetLoadBalancer<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<LoadBalancer>> {
        Operation::new(self.client, "get_load_balancer", Method::GET, "/load_balancers/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_load_balancer`]
#[derive(Debug, Clone)]
pub struct UpdateLoadBalancer<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: LoadBalancerPatch,
}

impl<'a> UpdateLoadBalancer<'a> {
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

    pub fn logging(mut self, value: LoadBalancerLogging) -> Self {
        self.body.logging = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancer>> {
        Operation::new(self.client, "update_load_balancer", Method::PATCH, "/load_balancers/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_load_balancer_statistics`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancerStatistics<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetLoadBalancerStatistics<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerStatistics>> {
        Operation::new(
            self.client,
            "get_load_balancer_statistics",
            Method::GET,
            "/load_balancers/{id}/statistics",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_load_balancer_listeners`]
#[derive(Debug, Clone)]
pub struct ListLoadBalancerListeners<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
}

impl<'a> ListLoadBalancerListeners<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerCollection>> {
        Operation::new(
            self.client,
            "list_load_balancer_listeners",
            Method::GET,
            "/load_balancers/{load_balancer_id}/listeners",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_load_balancer_listener`]
#[derive(Debug, Clone)]
pub struct CreateLoadBalancerListener<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    body: LoadBalancerListenerPrototype,
}

impl<'a> CreateLoadBalancerListener<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn certificate_instance(mut self, value: Identity) -> Self {
        self.body.certificate_instance = Some(value);
        self
    }

    pub fn connection_limit(mut self, value: u32) -> Self {
        self.body.connection_limit = Some(value);
        self
    }

    pub fn default_pool(mut self, value: Identity) -> Self {
        self.body.default_pool = Some(value);
        self
    }

    pub fn policies(mut self, value: Vec<LoadBalancerListenerPolicyPrototype>) -> Self {
        self.body.policies = Some(value);
        self
    }

    pub fn port(mut self, value: u16) -> Self {
        self.body.port = Some(value);
        self
    }

    pub fn protocol(mut self, value: LoadBalancerProtocol) -> Self {
        self.body.protocol = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerListenerPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListener>> {
        Operation::new(
            self.client,
            "create_load_balancer_listener",
            Method::POST,
            "/load_balancers/{load_balancer_id}/listeners",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .require("port", self.body.port.is_some())
        .require("protocol", self.body.protocol.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_load_balancer_listener`]
#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerListener<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteLoadBalancerListener<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_load_balancer_listener",
            Method::DELETE,
            "/load_balancers/{load_balancer_id}/listeners/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_load_balancer_listener`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancerListener<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetLoadBalancerListener<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListener>> {
        Operation::new(
            self.client,
            "get_load_balancer_listener",
            Method::GET,
            "/load_balancers/{load_balancer_id}/listeners/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_load_balancer_listener`]
#[derive(Debug, Clone)]
pub struct UpdateLoadBalancerListener<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    id: Option<String>,
    body: LoadBalancerListenerPatch,
}

impl<'a> UpdateLoadBalancerListener<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn certificate_instance(mut self, value: Identity) -> Self {
        self.body.certificate_instance = Some(value);
        self
    }

    pub fn connection_limit(mut self, value: u32) -> Self {
        self.body.connection_limit = Some(value);
        self
    }

    pub fn default_pool(mut self, value: Identity) -> Self {
        self.body.default_pool = Some(value);
        self
    }

    pub fn port(mut self, value: u16) -> Self {
        self.body.port = Some(value);
        self
    }

    pub fn protocol(mut self, value: LoadBalancerProtocol) -> Self {
        self.body.protocol = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerListenerPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListener>> {
        Operation::new(
            self.client,
            "update_load_balancer_listener",
            Method::PATCH,
            "/load_balancers/{load_balancer_id}/listeners/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_load_balancer_listener_policies`]
#[derive(Debug, Clone)]
pub struct ListLoadBalancerListenerPolicies<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
}

impl<'a> ListLoadBalancerListenerPolicies<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicyCollection>> {
        Operation::new(
            self.client,
            "list_load_balancer_listener_policies",
            Method::GET,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_load_balancer_listener_policy`]
#[derive(Debug, Clone)]
pub struct CreateLoadBalancerListenerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    body: LoadBalancerListenerPolicyPrototype,
}

impl<'a> CreateLoadBalancerListenerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn action(mut self, value: ListenerPolicyAction) -> Self {
        self.body.action = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn priority(mut self, value: u16) -> Self {
        self.body.priority = Some(value);
        self
    }

    pub fn rules(mut self, value: Vec<LoadBalancerListenerPolicyRulePrototype>) -> Self {
        self.body.rules = Some(value);
        self
    }

    pub fn target(mut self, value: ListenerPolicyTarget) -> Self {
        self.body.target = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerListenerPolicyPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicy>> {
        Operation::new(
            self.client,
            "create_load_balancer_listener_policy",
            Method::POST,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .require("action", self.body.action.is_some())
        .require("priority", self.body.priority.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_load_balancer_listener_policy`]
#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerListenerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteLoadBalancerListenerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_load_balancer_listener_policy",
            Method::DELETE,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_load_balancer_listener_policy`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancerListenerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetLoadBalancerListenerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicy>> {
        Operation::new(
            self.client,
            "get_load_balancer_listener_policy",
            Method::GET,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_load_balancer_listener_policy`]
#[derive(Debug, Clone)]
pub struct UpdateLoadBalancerListenerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    id: Option<String>,
    body: LoadBalancerListenerPolicyPatch,
}

impl<'a> UpdateLoadBalancerListenerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
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

    pub fn priority(mut self, value: u16) -> Self {
        self.body.priority = Some(value);
        self
    }

    pub fn target(mut self, value: ListenerPolicyTarget) -> Self {
        self.body.target = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerListenerPolicyPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicy>> {
        Operation::new(
            self.client,
            "update_load_balancer_listener_policy",
            Method::PATCH,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_load_balancer_listener_policy_rules`]
#[derive(Debug, Clone)]
pub struct ListLoadBalancerListenerPolicyRules<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    policy_id: Option<String>,
}

impl<'a> ListLoadBalancerListenerPolicyRules<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            policy_id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn policy_id(mut self, value: impl Into<String>) -> Self {
        self.policy_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicyRuleCollection>> {
        Operation::new(
            self.client,
            "list_load_balancer_listener_policy_rules",
            Method::GET,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("policy_id", self.policy_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_load_balancer_listener_policy_rule`]
#[derive(Debug, Clone)]
pub struct CreateLoadBalancerListenerPolicyRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    policy_id: Option<String>,
    body: LoadBalancerListenerPolicyRulePrototype,
}

impl<'a> CreateLoadBalancerListenerPolicyRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            policy_id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn policy_id(mut self, value: impl Into<String>) -> Self {
        self.policy_id = Some(value.into());
        self
    }

    pub fn condition(mut self, value: PolicyRuleCondition) -> Self {
        self.body.condition = Some(value);
        self
    }

    pub fn field(mut self, value: impl Into<String>) -> Self {
        self.body.field = Some(value.into());
        self
    }

    pub fn rule_type(mut self, value: PolicyRuleType) -> Self {
        self.body.rule_type = Some(value);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.body.value = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerListenerPolicyRulePrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicyRule>> {
        Operation::new(
            self.client,
            "create_load_balancer_listener_policy_rule",
            Method::POST,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("policy_id", self.policy_id)
        .require("condition", self.body.condition.is_some())
        .require("type", self.body.rule_type.is_some())
        .require("value", self.body.value.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_load_balancer_listener_policy_rule`]
#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerListenerPolicyRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    policy_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteLoadBalancerListenerPolicyRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            policy_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn policy_id(mut self, value: impl Into<String>) -> Self {
        self.policy_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_load_balancer_listener_policy_rule",
            Method::DELETE,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("policy_id", self.policy_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_load_balancer_listener_policy_rule`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancerListenerPolicyRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    policy_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetLoadBalancerListenerPolicyRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            policy_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn policy_id(mut self, value: impl Into<String>) -> Self {
        self.policy_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicyRule>> {
        Operation::new(
            self.client,
            "get_load_balancer_listener_policy_rule",
            Method::GET,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("policy_id", self.policy_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_load_balancer_listener_policy_rule`]
#[derive(Debug, Clone)]
pub struct UpdateLoadBalancerListenerPolicyRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    listener_id: Option<String>,
    policy_id: Option<String>,
    id: Option<String>,
    body: LoadBalancerListenerPolicyRulePatch,
}

impl<'a> UpdateLoadBalancerListenerPolicyRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            listener_id: None,
            policy_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn listener_id(mut self, value: impl Into<String>) -> Self {
        self.listener_id = Some(value.into());
        self
    }

    pub fn policy_id(mut self, value: impl Into<String>) -> Self {
        self.policy_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn condition(mut self, value: PolicyRuleCondition) -> Self {
        self.body.condition = Some(value);
        self
    }

    pub fn field(mut self, value: impl Into<String>) -> Self {
        self.body.field = Some(value.into());
        self
    }

    pub fn rule_type(mut self, value: PolicyRuleType) -> Self {
        self.body.rule_type = Some(value);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.body.value = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerListenerPolicyRulePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerListenerPolicyRule>> {
        Operation::new(
            self.client,
            "update_load_balancer_listener_policy_rule",
            Method::PATCH,
            "/load_balancers/{load_balancer_id}/listeners/{listener_id}/policies/{policy_id}/rules/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("listener_id", self.listener_id)
        .path("policy_id", self.policy_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_load_balancer_pools`]
#[derive(Debug, Clone)]
pub struct ListLoadBalancerPools<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
}

impl<'a> ListLoadBalancerPools<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPoolCollection>> {
        Operation::new(
            self.client,
            "list_load_balancer_pools",
            Method::GET,
            "/load_balancers/{load_balancer_id}/pools",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_load_balancer_pool`]
#[derive(Debug, Clone)]
pub struct CreateLoadBalancerPool<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    body: LoadBalancerPoolPrototype,
}

impl<'a> CreateLoadBalancerPool<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn algorithm(mut self, value: PoolAlgorithm) -> Self {
        self.body.algorithm = Some(value);
        self
    }

    pub fn health_monitor(mut self, value: LoadBalancerPoolHealthMonitor) -> Self {
        self.body.health_monitor = Some(value);
        self
    }

    pub fn members(mut self, value: Vec<LoadBalancerPoolMemberPrototype>) -> Self {
        self.body.members = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn protocol(mut self, value: LoadBalancerProtocol) -> Self {
        self.body.protocol = Some(value);
        self
    }

    pub fn session_persistence(mut self, value: LoadBalancerPoolSessionPersistence) -> Self {
        self.body.session_persistence = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerPoolPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPool>> {
        Operation::new(
            self.client,
            "create_load_balancer_pool",
            Method::POST,
            "/load_balancers/{load_balancer_id}/pools",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .require("algorithm", self.body.algorithm.is_some())
        .require("health_monitor", self.body.health_monitor.is_some())
        .require("protocol", self.body.protocol.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_load_balancer_pool`]
#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerPool<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteLoadBalancerPool<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_load_balancer_pool",
            Method::DELETE,
            "/load_balancers/{load_balancer_id}/pools/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_load_balancer_pool`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancerPool<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetLoadBalancerPool<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPool>> {
        Operation::new(
            self.client,
            "get_load_balancer_pool",
            Method::GET,
            "/load_balancers/{load_balancer_id}/pools/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_load_balancer_pool`]
#[derive(Debug, Clone)]
pub struct UpdateLoadBalancerPool<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    id: Option<String>,
    body: LoadBalancerPoolPatch,
}

impl<'a> UpdateLoadBalancerPool<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn algorithm(mut self, value: PoolAlgorithm) -> Self {
        self.body.algorithm = Some(value);
        self
    }

    pub fn health_monitor(mut self, value: LoadBalancerPoolHealthMonitor) -> Self {
        self.body.health_monitor = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn protocol(mut self, value: LoadBalancerProtocol) -> Self {
        self.body.protocol = Some(value);
        self
    }

    pub fn session_persistence(mut self, value: LoadBalancerPoolSessionPersistence) -> Self {
        self.body.session_persistence = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerPoolPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPool>> {
        Operation::new(
            self.client,
            "update_load_balancer_pool",
            Method::PATCH,
            "/load_balancers/{load_balancer_id}/pools/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_load_balancer_pool_members`]
#[derive(Debug, Clone)]
pub struct ListLoadBalancerPoolMembers<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    pool_id: Option<String>,
}

impl<'a> ListLoadBalancerPoolMembers<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            pool_id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn pool_id(mut self, value: impl Into<String>) -> Self {
        self.pool_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPoolMemberCollection>> {
        Operation::new(
            self.client,
            "list_load_balancer_pool_members",
            Method::GET,
            "/load_balancers/{load_balancer_id}/pools/{pool_id}/members",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("pool_id", self.pool_id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_load_balancer_pool_member`]
#[derive(Debug, Clone)]
pub struct CreateLoadBalancerPoolMember<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    pool_id: Option<String>,
    body: LoadBalancerPoolMemberPrototype,
}

impl<'a> CreateLoadBalancerPoolMember<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            pool_id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn pool_id(mut self, value: impl Into<String>) -> Self {
        self.pool_id = Some(value.into());
        self
    }

    pub fn port(mut self, value: u16) -> Self {
        self.body.port = Some(value);
        self
    }

    pub fn target(mut self, value: LoadBalancerPoolMemberTarget) -> Self {
        self.body.target = Some(value);
        self
    }

    pub fn weight(mut self, value: u8) -> Self {
        self.body.weight = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerPoolMemberPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPoolMember>> {
        Operation::new(
            self.client,
            "create_load_balancer_pool_member",
            Method::POST,
            "/load_balancers/{load_balancer_id}/pools/{pool_id}/members",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("pool_id", self.pool_id)
        .require("port", self.body.port.is_some())
        .require("target", self.body.target.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::replace_load_balancer_pool_members`]
#[derive(Debug, Clone)]
pub struct ReplaceLoadBalancerPoolMembers<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    pool_id: Option<String>,
    body: LoadBalancerPoolMembersReplacement,
}

impl<'a> ReplaceLoadBalancerPoolMembers<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            pool_id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn pool_id(mut self, value: impl Into<String>) -> Self {
        self.pool_id = Some(value.into());
        self
    }

    pub fn members(mut self, value: Vec<LoadBalancerPoolMemberPrototype>) -> Self {
        self.body.members = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerPoolMembersReplacement) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPoolMemberCollection>> {
        Operation::new(
            self.client,
            "replace_load_balancer_pool_members",
            Method::PUT,
            "/load_balancers/{load_balancer_id}/pools/{pool_id}/members",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("pool_id", self.pool_id)
        .require("members", self.body.members.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_load_balancer_pool_member`]
#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerPoolMember<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    pool_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteLoadBalancerPoolMember<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            pool_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn pool_id(mut self, value: impl Into<String>) -> Self {
        self.pool_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_load_balancer_pool_member",
            Method::DELETE,
            "/load_balancers/{load_balancer_id}/pools/{pool_id}/members/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("pool_id", self.pool_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_load_balancer_pool_member`]
#[derive(Debug, Clone)]
pub struct GetLoadBalancerPoolMember<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    pool_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetLoadBalancerPoolMember<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            pool_id: None,
            id: None,
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn pool_id(mut self, value: impl Into<String>) -> Self {
        self.pool_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPoolMember>> {
        Operation::new(
            self.client,
            "get_load_balancer_pool_member",
            Method::GET,
            "/load_balancers/{load_balancer_id}/pools/{pool_id}/members/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("pool_id", self.pool_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_load_balancer_pool_member`]
#[derive(Debug, Clone)]
pub struct UpdateLoadBalancerPoolMember<'a> {
    client: &'a Client,
    headers: HeaderMap,
    load_balancer_id: Option<String>,
    pool_id: Option<String>,
    id: Option<String>,
    body: LoadBalancerPoolMemberPatch,
}

impl<'a> UpdateLoadBalancerPoolMember<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            load_balancer_id: None,
            pool_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn load_balancer_id(mut self, value: impl Into<String>) -> Self {
        self.load_balancer_id = Some(value.into());
        self
    }

    pub fn pool_id(mut self, value: impl Into<String>) -> Self {
        self.pool_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn port(mut self, value: u16) -> Self {
        self.body.port = Some(value);
        self
    }

    pub fn target(mut self, value: LoadBalancerPoolMemberTarget) -> Self {
        self.body.target = Some(value);
        self
    }

    pub fn weight(mut self, value: u8) -> Self {
        self.body.weight = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: LoadBalancerPoolMemberPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<LoadBalancerPoolMember>> {
        Operation::new(
            self.client,
            "update_load_balancer_pool_member",
            Method::PATCH,
            "/load_balancers/{load_balancer_id}/pools/{pool_id}/members/{id}",
        )
        .path("load_balancer_id", self.load_balancer_id)
        .path("pool_id", self.pool_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListLoadBalancerProfiles,
    GetLoadBalancerProfile,
    ListLoadBalancers,
    CreateLoadBalancer,
    DeleteLoadBalancer,
    GetLoadBalancer,
    UpdateLoadBalancer,
    GetLoadBalancerStatistics,
    ListLoadBalancerListeners,
    CreateLoadBalancerListener,
    DeleteLoadBalancerListener,
    GetLoadBalancerListener,
    UpdateLoadBalancerListener,
    ListLoadBalancerListenerPolicies,
    CreateLoadBalancerListenerPolicy,
    DeleteLoadBalancerListenerPolicy,
    GetLoadBalancerListenerPolicy,
    UpdateLoadBalancerListenerPolicy,
    ListLoadBalancerListenerPolicyRules,
    CreateLoadBalancerListenerPolicyRule,
    DeleteLoadBalancerListenerPolicyRule,
    GetLoadBalancerListenerPolicyRule,
    UpdateLoadBalancerListenerPolicyRule,
    ListLoadBalancerPools,
    CreateLoadBalancerPool,
    DeleteLoadBalancerPool,
    GetLoadBalancerPool,
    UpdateLoadBalancerPool,
    ListLoadBalancerPoolMembers,
    CreateLoadBalancerPoolMember,
    ReplaceLoadBalancerPoolMembers,
    DeleteLoadBalancerPoolMember,
    GetLoadBalancerPoolMember,
    UpdateLoadBalancerPoolMember,
}
