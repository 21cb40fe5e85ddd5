// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Load balancer commands

use anyhow::{Context, Result};
use clap::Subcommand;
use vpc_client::Client;
use vpc_client::types::IpAddress;

use super::{DeleteArgs, GetArgs};
use crate::output::print_json;
use crate::output::table::{create_table, opt, print_details, print_table, reference};

#[derive(Subcommand, Clone)]
pub enum LoadBalancerCommand {
    /// List load balancers
    #[command(alias = "ls")]
    List,
    /// Get load balancer details
    Get(GetArgs),
    /// Delete load balancer(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

impl LoadBalancerCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_load_balancers(client, use_json).await,
            Self::Get(args) => get_load_balancer(args, client, use_json).await,
            Self::Delete(args) => delete_load_balancers(args, client).await,
        }
    }
}

fn addresses(ips: &[IpAddress]) -> String {
    if ips.is_empty() {
        return "-".to_string();
    }
    ips.iter()
        .map(|ip| ip.address.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

async fn list_load_balancers(client: &Client, use_json: bool) -> Result<()> {
    // Not paginated: one response holds every load balancer
    let load_balancers = client
        .list_load_balancers()
        .send()
        .await
        .context("failed to list load balancers")?
        .into_inner()
        .load_balancers;

    if use_json {
        print_json(&load_balancers)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "HOSTNAME", "PUBLIC", "STATE", "STATUS"]);
        for lb in &load_balancers {
            table.add_row(vec![
                lb.id.clone(),
                lb.name.clone(),
                opt(lb.hostname.as_deref()),
                opt(lb.is_public),
                opt(lb.provisioning_status),
                opt(lb.operating_status),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_load_balancer(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let lb = client
        .get_load_balancer()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get load balancer {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&lb)?;
    } else {
        let subnets = lb
            .subnets
            .iter()
            .map(|s| reference(Some(s)))
            .collect::<Vec<_>>()
            .join(",");
        print_details(&[
            ("ID", lb.id.clone()),
            ("Name", lb.name.clone()),
            ("Hostname", opt(lb.hostname.as_deref())),
            ("Public", opt(lb.is_public)),
            ("Profile", opt(lb.profile.as_ref().map(|p| &p.name))),
            ("Provisioning", opt(lb.provisioning_status)),
            ("Operating", opt(lb.operating_status)),
            ("Public IPs", addresses(&lb.public_ips)),
            ("Private IPs", addresses(&lb.private_ips)),
            ("Subnets", subnets),
            ("Listeners", lb.listeners.len().to_string()),
            ("Pools", lb.pools.len().to_string()),
        ]);
    }

    Ok(())
}

async fn delete_load_balancers(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_load_balancer()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete load balancer {id}"))?;
        println!("Deleting load balancer {id}");
    }
    Ok(())
}
