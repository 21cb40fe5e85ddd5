// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Walking paginated list operations

use std::future::Future;

use vpc_pagination::Page;
use vpc_types::Paginated;

use crate::builder::*;
use crate::types::{
    AddressPrefixCollection, EndpointGatewayCollection, FloatingIpCollection,
    FlowLogCollectorCollection, IkePolicyCollection, ImageCollection,
    InstanceCollection, InstanceGroupCollection, InstanceGroupManagerCollection,
    InstanceGroupManagerPolicyCollection, InstanceGroupMembershipCollection,
    InstanceProfileCollection, IpsecPolicyCollection, KeyCollection,
    LoadBalancerProfileCollection, NetworkAclCollection, NetworkAclRuleCollection,
    OperatingSystemCollection, PublicGatewayCollection,
    ReservedIpCollectionEndpointGatewayContext, RouteCollection, SecurityGroupCollection,
    SubnetCollection, VolumeCollection, VolumeProfileCollection, VpcCollection,
    VpnGatewayCollection,
};
use crate::{Error, ResponseValue, Result};

/// A list request whose response is one page of a collection
///
/// The returned futures are `Send`, so a page walk can run on a spawned task.
pub trait ListRequest: Clone + Send + Sync + Sized {
    type Collection: Paginated<Item: Send> + Send;

    /// The same request, starting at the page identified by `token`
    fn start_at(self, token: String) -> Self;

    /// Fetch the single page this request describes
    fn fetch(self) -> impl Future<Output = Result<ResponseValue<Self::Collection>>> + Send;

    /// Fetch this page and every page after it
    ///
    /// Other parameters (`limit`, filters) are kept for every page.
    fn collect_all(
        self,
    ) -> impl Future<Output = Result<Vec<<Self::Collection as Paginated>::Item>>> + Send {
        async move {
            vpc_pagination::collect_all(|start| {
                let request = match start {
                    Some(token) => self.clone().start_at(token),
                    None => self.clone(),
                };
                async move {
                    let page = request.fetch().await?.into_inner();
                    let next = page.next_start();
                    Ok::<_, Error>(Page::new(page.into_items(), next))
                }
            })
            .await
        }
    }
}

macro_rules! list_request {
    ($($builder:ident => $collection:ty),* $(,)?) => {
        $(
            impl ListRequest for $builder<'_> {
                type Collection = $collection;

                fn start_at(self, token: String) -> Self {
                    self.start(token)
                }

                fn fetch(
                    self,
                ) -> impl Future<Output = Result<ResponseValue<$collection>>> + Send {
                    self.send()
                }
            }
        )*
    };
}

list_request! {
    ListVpcs => VpcCollection,
    ListVpcAddressPrefixes => AddressPrefixCollection,
    ListVpcRoutes => RouteCollection,
    ListSubnets => SubnetCollection,
    ListImages => ImageCollection,
    ListOperatingSystems => OperatingSystemCollection,
    ListKeys => KeyCollection,
    ListInstanceProfiles => InstanceProfileCollection,
    ListInstances => InstanceCollection,
    ListInstanceGroups => InstanceGroupCollection,
    ListInstanceGroupManagers => InstanceGroupManagerCollection,
    ListInstanceGroupManagerPolicies => InstanceGroupManagerPolicyCollection,
    ListInstanceGroupMemberships => InstanceGroupMembershipCollection,
    ListVolumeProfiles => VolumeProfileCollection,
    ListVolumes => VolumeCollection,
    ListPublicGateways => PublicGatewayCollection,
    ListFloatingIps => FloatingIpCollection,
    ListNetworkAcls => NetworkAclCollection,
    ListNetworkAclRules => NetworkAclRuleCollection,
    ListSecurityGroups => SecurityGroupCollection,
    ListIkePolicies => IkePolicyCollection,
    ListIpsecPolicies => IpsecPolicyCollection,
    ListVpnGateways => VpnGatewayCollection,
    ListLoadBalancerProfiles => LoadBalancerProfileCollection,
    ListEndpointGateways => EndpointGatewayCollection,
    ListEndpointGatewayIps => ReservedIpCollectionEndpointGatewayContext,
    ListFlowLogCollectors => FlowLogCollectorCollection,
}
