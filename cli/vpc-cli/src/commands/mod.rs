// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI command implementations

pub mod floating_ip;
pub mod geography;
pub mod image;
pub mod instance;
pub mod key;
pub mod load_balancer;
pub mod public_gateway;
pub mod security_group;
pub mod subnet;
pub mod volume;
pub mod vpc;

pub use floating_ip::FloatingIpCommand;
pub use geography::{RegionCommand, ZoneCommand};
pub use image::ImageCommand;
pub use instance::InstanceCommand;
pub use key::KeyCommand;
pub use load_balancer::LoadBalancerCommand;
pub use public_gateway::PublicGatewayCommand;
pub use security_group::SecurityGroupCommand;
pub use subnet::SubnetCommand;
pub use volume::VolumeCommand;
pub use vpc::VpcCommand;

use clap::Args;

/// Filters shared by list commands
#[derive(Args, Clone, Debug, Default)]
pub struct PageArgs {
    /// Page size requested from the API
    #[arg(long)]
    pub limit: Option<u32>,

    /// Only resources in this resource group (ID)
    #[arg(long)]
    pub resource_group: Option<String>,
}

/// IDs of resources to delete
#[derive(Args, Clone, Debug)]
pub struct DeleteArgs {
    /// Resource ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Resource to show
#[derive(Args, Clone, Debug)]
pub struct GetArgs {
    /// Resource ID
    pub id: String,
}
