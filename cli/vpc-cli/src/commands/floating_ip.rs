// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Floating IP commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::types::FloatingIpTarget;
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, named, opt, print_details, print_table};

#[derive(Subcommand, Clone)]
pub enum FloatingIpCommand {
    /// List floating IPs
    #[command(alias = "ls")]
    List(FloatingIpListArgs),
    /// Get floating IP details
    Get(GetArgs),
    /// Release floating IP(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct FloatingIpListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

impl FloatingIpCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_floating_ips(args, client, use_json).await,
            Self::Get(args) => get_floating_ip(args, client, use_json).await,
            Self::Delete(args) => delete_floating_ips(args, client).await,
        }
    }
}

fn target(target: Option<&FloatingIpTarget>) -> String {
    opt(target.map(|t| t.name.clone().unwrap_or_else(|| t.id.clone())))
}

async fn list_floating_ips(
    args: FloatingIpListArgs,
    client: &Client,
    use_json: bool,
) -> Result<()> {
    let mut request = client.list_floating_ips();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }

    let ips = request
        .collect_all()
        .await
        .context("failed to list floating IPs")?;

    if use_json {
        print_json(&ips)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "ADDRESS", "TARGET", "ZONE", "STATUS"]);
        for ip in &ips {
            table.add_row(vec![
                ip.id.clone(),
                ip.name.clone(),
                ip.address.clone(),
                target(ip.target.as_ref()),
                named(ip.zone.as_ref()),
                opt(ip.status),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_floating_ip(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let ip = client
        .get_floating_ip()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get floating IP {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&ip)?;
    } else {
        print_details(&[
            ("ID", ip.id.clone()),
            ("Name", ip.name.clone()),
            ("Address", ip.address.clone()),
            ("Target", target(ip.target.as_ref())),
            (
                "Target type",
                opt(ip.target.as_ref().and_then(|t| t.resource_type.as_deref())),
            ),
            ("Zone", named(ip.zone.as_ref())),
            ("Status", opt(ip.status)),
        ]);
    }

    Ok(())
}

async fn delete_floating_ips(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_floating_ip()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to release floating IP {id}"))?;
        println!("Released floating IP {id}");
    }
    Ok(())
}
