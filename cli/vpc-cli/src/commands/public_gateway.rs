// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public gateway commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, named, opt, print_details, print_table, reference};

#[derive(Subcommand, Clone)]
pub enum PublicGatewayCommand {
    /// List public gateways
    #[command(alias = "ls")]
    List(PublicGatewayListArgs),
    /// Get public gateway details
    Get(GetArgs),
    /// Delete public gateway(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct PublicGatewayListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

impl PublicGatewayCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_public_gateways(args, client, use_json).await,
            Self::Get(args) => get_public_gateway(args, client, use_json).await,
            Self::Delete(args) => delete_public_gateways(args, client).await,
        }
    }
}

async fn list_public_gateways(
    args: PublicGatewayListArgs,
    client: &Client,
    use_json: bool,
) -> Result<()> {
    let mut request = client.list_public_gateways();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }

    let gateways = request
        .collect_all()
        .await
        .context("failed to list public gateways")?;

    if use_json {
        print_json(&gateways)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "FLOATING IP", "VPC", "ZONE", "STATUS"]);
        for gateway in &gateways {
            table.add_row(vec![
                gateway.id.clone(),
                gateway.name.clone(),
                opt(gateway.floating_ip.as_ref().map(|ip| &ip.address)),
                reference(gateway.vpc.as_ref()),
                named(gateway.zone.as_ref()),
                opt(gateway.status),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_public_gateway(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let gateway = client
        .get_public_gateway()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get public gateway {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&gateway)?;
    } else {
        print_details(&[
            ("ID", gateway.id.clone()),
            ("Name", gateway.name.clone()),
            (
                "Floating IP",
                opt(gateway.floating_ip.as_ref().map(|ip| &ip.address)),
            ),
            ("VPC", reference(gateway.vpc.as_ref())),
            ("Zone", named(gateway.zone.as_ref())),
            ("Status", opt(gateway.status)),
        ]);
    }

    Ok(())
}

async fn delete_public_gateways(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_public_gateway()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete public gateway {id}"))?;
        println!("Deleted public gateway {id}");
    }
    Ok(())
}
