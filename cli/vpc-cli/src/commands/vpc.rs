// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPC commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::types::{AddressPrefixManagement, Identity};
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, opt, print_details, print_table, reference};

#[derive(Subcommand, Clone)]
pub enum VpcCommand {
    /// List VPCs
    #[command(alias = "ls")]
    List(VpcListArgs),
    /// Get VPC details
    Get(GetArgs),
    /// Create a VPC
    Create(VpcCreateArgs),
    /// Delete VPC(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct VpcListArgs {
    #[command(flatten)]
    pub page: PageArgs,
    /// Only VPCs connected to Classic Infrastructure
    #[arg(long)]
    pub classic_access: bool,
}

#[derive(Args, Clone)]
pub struct VpcCreateArgs {
    /// VPC name (generated by the service when omitted)
    #[arg(short, long)]
    pub name: Option<String>,
    /// Connect the VPC to Classic Infrastructure
    #[arg(long)]
    pub classic_access: bool,
    /// Create no default address prefixes
    #[arg(long)]
    pub manual_address_prefixes: bool,
    /// Resource group ID
    #[arg(long)]
    pub resource_group: Option<String>,
}

impl VpcCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_vpcs(args, client, use_json).await,
            Self::Get(args) => get_vpc(args, client, use_json).await,
            Self::Create(args) => create_vpc(args, client, use_json).await,
            Self::Delete(args) => delete_vpcs(args, client).await,
        }
    }
}

async fn list_vpcs(args: VpcListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut request = client.list_vpcs();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }
    if args.classic_access {
        request = request.classic_access(true);
    }

    let vpcs = request.collect_all().await.context("failed to list VPCs")?;

    if use_json {
        print_json(&vpcs)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "STATUS", "CLASSIC", "CREATED"]);
        for vpc in &vpcs {
            table.add_row(vec![
                vpc.id.clone(),
                vpc.name.clone(),
                opt(vpc.status),
                opt(vpc.classic_access),
                opt(vpc.created_at.map(|t| t.format("%Y-%m-%d").to_string())),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_vpc(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let vpc = client
        .get_vpc()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get VPC {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&vpc)?;
    } else {
        print_details(&[
            ("ID", vpc.id.clone()),
            ("Name", vpc.name.clone()),
            ("CRN", opt(vpc.crn.as_deref())),
            ("Status", opt(vpc.status)),
            ("Classic access", opt(vpc.classic_access)),
            ("Default ACL", reference(vpc.default_network_acl.as_ref())),
            ("Default SG", reference(vpc.default_security_group.as_ref())),
            ("Resource group", reference(vpc.resource_group.as_ref())),
            ("Created", opt(vpc.created_at)),
        ]);
    }

    Ok(())
}

async fn create_vpc(args: VpcCreateArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut request = client.create_vpc();
    if let Some(name) = args.name {
        request = request.name(name);
    }
    if args.classic_access {
        request = request.classic_access(true);
    }
    if args.manual_address_prefixes {
        request = request.address_prefix_management(AddressPrefixManagement::Manual);
    }
    if let Some(group) = args.resource_group {
        request = request.resource_group(Identity::by_id(group));
    }

    let vpc = request
        .send()
        .await
        .context("failed to create VPC")?
        .into_inner();

    if use_json {
        print_json(&vpc)?;
    } else {
        println!("Created VPC {} ({})", vpc.name, vpc.id);
    }

    Ok(())
}

async fn delete_vpcs(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_vpc()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete VPC {id}"))?;
        println!("Deleted VPC {id}");
    }
    Ok(())
}
