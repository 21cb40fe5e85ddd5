// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Security group commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::types::{SecurityGroupRule, SecurityGroupRuleRemote};
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, opt, print_details, print_table, reference};

#[derive(Subcommand, Clone)]
pub enum SecurityGroupCommand {
    /// List security groups
    #[command(alias = "ls")]
    List(SecurityGroupListArgs),
    /// Get security group details with its rules
    Get(GetArgs),
    /// Delete security group(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct SecurityGroupListArgs {
    #[command(flatten)]
    pub page: PageArgs,
    /// Only security groups in this VPC (ID)
    #[arg(long)]
    pub vpc: Option<String>,
}

impl SecurityGroupCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_security_groups(args, client, use_json).await,
            Self::Get(args) => get_security_group(args, client, use_json).await,
            Self::Delete(args) => delete_security_groups(args, client).await,
        }
    }
}

async fn list_security_groups(
    args: SecurityGroupListArgs,
    client: &Client,
    use_json: bool,
) -> Result<()> {
    let mut request = client.list_security_groups();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }
    if let Some(vpc) = args.vpc {
        request = request.vpc_id(vpc);
    }

    let groups = request
        .collect_all()
        .await
        .context("failed to list security groups")?;

    if use_json {
        print_json(&groups)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "VPC", "RULES", "INTERFACES"]);
        for group in &groups {
            table.add_row(vec![
                group.id.clone(),
                group.name.clone(),
                reference(group.vpc.as_ref()),
                group.rules.len().to_string(),
                group.network_interfaces.len().to_string(),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

fn remote(remote: Option<&SecurityGroupRuleRemote>) -> String {
    let Some(remote) = remote else {
        return "any".to_string();
    };
    remote
        .cidr_block
        .clone()
        .or_else(|| remote.address.clone())
        .or_else(|| remote.name.clone())
        .or_else(|| remote.id.clone())
        .unwrap_or_else(|| "any".to_string())
}

fn ports(rule: &SecurityGroupRule) -> String {
    match (rule.port_min, rule.port_max) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{min}-{max}"),
        _ => "-".to_string(),
    }
}

async fn get_security_group(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let group = client
        .get_security_group()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get security group {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&group)?;
        return Ok(());
    }

    print_details(&[
        ("ID", group.id.clone()),
        ("Name", group.name.clone()),
        ("VPC", reference(group.vpc.as_ref())),
        ("Resource group", reference(group.resource_group.as_ref())),
        ("Created", opt(group.created_at)),
    ]);
    println!();

    let mut table = create_table(&["RULE", "DIRECTION", "PROTOCOL", "PORTS", "REMOTE"]);
    for rule in &group.rules {
        table.add_row(vec![
            rule.id.clone(),
            rule.direction.to_string(),
            rule.protocol.to_string(),
            ports(rule),
            remote(rule.remote.as_ref()),
        ]);
    }
    print_table(table);

    Ok(())
}

async fn delete_security_groups(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_security_group()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete security group {id}"))?;
        println!("Deleted security group {id}");
    }
    Ok(())
}
