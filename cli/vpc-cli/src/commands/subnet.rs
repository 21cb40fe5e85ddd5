// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subnet commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, named, opt, print_details, print_table, reference};

#[derive(Subcommand, Clone)]
pub enum SubnetCommand {
    /// List subnets
    #[command(alias = "ls")]
    List(SubnetListArgs),
    /// Get subnet details
    Get(GetArgs),
    /// Delete subnet(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct SubnetListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

impl SubnetCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_subnets(args, client, use_json).await,
            Self::Get(args) => get_subnet(args, client, use_json).await,
            Self::Delete(args) => delete_subnets(args, client).await,
        }
    }
}

async fn list_subnets(args: SubnetListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut request = client.list_subnets();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }

    let subnets = request.collect_all().await.context("failed to list subnets")?;

    if use_json {
        print_json(&subnets)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "CIDR", "ZONE", "VPC", "FREE", "STATUS"]);
        for subnet in &subnets {
            table.add_row(vec![
                subnet.id.clone(),
                subnet.name.clone(),
                opt(subnet.ipv4_cidr_block.as_deref()),
                named(subnet.zone.as_ref()),
                reference(subnet.vpc.as_ref()),
                opt(subnet.available_ipv4_address_count),
                opt(subnet.status),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_subnet(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let subnet = client
        .get_subnet()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get subnet {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&subnet)?;
    } else {
        print_details(&[
            ("ID", subnet.id.clone()),
            ("Name", subnet.name.clone()),
            ("CIDR", opt(subnet.ipv4_cidr_block.as_deref())),
            ("Zone", named(subnet.zone.as_ref())),
            ("VPC", reference(subnet.vpc.as_ref())),
            ("Network ACL", reference(subnet.network_acl.as_ref())),
            ("Public gateway", reference(subnet.public_gateway.as_ref())),
            (
                "Addresses",
                format!(
                    "{} free of {}",
                    opt(subnet.available_ipv4_address_count),
                    opt(subnet.total_ipv4_address_count)
                ),
            ),
            ("Status", opt(subnet.status)),
        ]);
    }

    Ok(())
}

async fn delete_subnets(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_subnet()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete subnet {id}"))?;
        println!("Deleted subnet {id}");
    }
    Ok(())
}
