// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::types::InstanceAction;
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, named, opt, print_details, print_table, reference};

#[derive(Subcommand, Clone)]
pub enum InstanceCommand {
    /// List instances
    #[command(alias = "ls")]
    List(InstanceListArgs),
    /// Get instance details
    Get(GetArgs),
    /// Start instance(s)
    Start(StartArgs),
    /// Stop instance(s)
    Stop(StopArgs),
    /// Reboot instance(s)
    Reboot(StopArgs),
    /// Delete instance(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct InstanceListArgs {
    #[command(flatten)]
    pub page: PageArgs,
    /// Only the instance with this name
    #[arg(long)]
    pub name: Option<String>,
    /// Only instances in this VPC (ID)
    #[arg(long)]
    pub vpc: Option<String>,
}

#[derive(Args, Clone)]
pub struct StartArgs {
    /// Instance ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct StopArgs {
    /// Instance ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
    /// Drop queued actions and act immediately
    #[arg(short, long)]
    pub force: bool,
}

impl InstanceCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_instances(args, client, use_json).await,
            Self::Get(args) => get_instance(args, client, use_json).await,
            Self::Start(args) => {
                for id in &args.ids {
                    let action = client
                        .start_instance(id)
                        .await
                        .with_context(|| format!("failed to start instance {id}"))?;
                    report(id, &action, use_json)?;
                }
                Ok(())
            }
            Self::Stop(args) => {
                for id in &args.ids {
                    let action = client
                        .stop_instance(id, args.force)
                        .await
                        .with_context(|| format!("failed to stop instance {id}"))?;
                    report(id, &action, use_json)?;
                }
                Ok(())
            }
            Self::Reboot(args) => {
                for id in &args.ids {
                    let action = client
                        .reboot_instance(id, args.force)
                        .await
                        .with_context(|| format!("failed to reboot instance {id}"))?;
                    report(id, &action, use_json)?;
                }
                Ok(())
            }
            Self::Delete(args) => delete_instances(args, client).await,
        }
    }
}

fn report(id: &str, action: &InstanceAction, use_json: bool) -> Result<()> {
    if use_json {
        print_json(action)?;
    } else {
        println!("Requested {} of instance {id} ({})", action.action_type, action.status);
    }
    Ok(())
}

async fn list_instances(args: InstanceListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut request = client.list_instances();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }
    if let Some(name) = args.name {
        request = request.name(name);
    }
    if let Some(vpc) = args.vpc {
        request = request.vpc_id(vpc);
    }

    let instances = request
        .collect_all()
        .await
        .context("failed to list instances")?;

    if use_json {
        print_json(&instances)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "PROFILE", "ZONE", "PRIMARY IP", "STATUS"]);
        for instance in &instances {
            let primary_ip = instance
                .primary_network_interface
                .as_ref()
                .and_then(|nic| nic.primary_ipv4_address.as_deref());
            table.add_row(vec![
                instance.id.clone(),
                instance.name.clone(),
                named(instance.profile.as_ref()),
                named(instance.zone.as_ref()),
                opt(primary_ip),
                opt(instance.status),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_instance(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let instance = client
        .get_instance()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get instance {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&instance)?;
    } else {
        print_details(&[
            ("ID", instance.id.clone()),
            ("Name", instance.name.clone()),
            ("Status", opt(instance.status)),
            ("Profile", named(instance.profile.as_ref())),
            ("vCPUs", opt(instance.vcpu.as_ref().map(|v| v.count))),
            ("Memory (GB)", opt(instance.memory)),
            ("Image", reference(instance.image.as_ref())),
            ("Zone", named(instance.zone.as_ref())),
            ("VPC", reference(instance.vpc.as_ref())),
            ("Created", opt(instance.created_at)),
        ]);
    }

    Ok(())
}

async fn delete_instances(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_instance()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete instance {id}"))?;
        println!("Deleted instance {id}");
    }
    Ok(())
}
