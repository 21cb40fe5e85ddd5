// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Block storage volume commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs};
use crate::output::print_json;
use crate::output::table::{create_table, named, opt, print_details, print_table, reference};

#[derive(Subcommand, Clone)]
pub enum VolumeCommand {
    /// List volumes
    #[command(alias = "ls")]
    List(VolumeListArgs),
    /// Get volume details
    Get(GetArgs),
    /// Delete volume(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct VolumeListArgs {
    /// Page size requested from the API
    #[arg(long)]
    pub limit: Option<u32>,
    /// Only the volume with this name
    #[arg(long)]
    pub name: Option<String>,
    /// Only volumes in this zone
    #[arg(long)]
    pub zone: Option<String>,
}

impl VolumeCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_volumes(args, client, use_json).await,
            Self::Get(args) => get_volume(args, client, use_json).await,
            Self::Delete(args) => delete_volumes(args, client).await,
        }
    }
}

async fn list_volumes(args: VolumeListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut request = client.list_volumes();
    if let Some(limit) = args.limit {
        request = request.limit(limit);
    }
    if let Some(name) = args.name {
        request = request.name(name);
    }
    if let Some(zone) = args.zone {
        request = request.zone_name(zone);
    }

    let volumes = request.collect_all().await.context("failed to list volumes")?;

    if use_json {
        print_json(&volumes)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "CAPACITY", "IOPS", "PROFILE", "ZONE", "STATUS"]);
        for volume in &volumes {
            table.add_row(vec![
                volume.id.clone(),
                volume.name.clone(),
                opt(volume.capacity.map(|gb| format!("{gb}G"))),
                opt(volume.iops),
                named(volume.profile.as_ref()),
                named(volume.zone.as_ref()),
                opt(volume.status),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_volume(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let volume = client
        .get_volume()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get volume {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&volume)?;
    } else {
        let attached = volume
            .volume_attachments
            .as_ref()
            .map(|attachments| attachments.len())
            .unwrap_or(0);
        print_details(&[
            ("ID", volume.id.clone()),
            ("Name", volume.name.clone()),
            ("Status", opt(volume.status)),
            ("Capacity (GB)", opt(volume.capacity)),
            ("IOPS", opt(volume.iops)),
            ("Profile", named(volume.profile.as_ref())),
            ("Encryption", opt(volume.encryption)),
            ("Zone", named(volume.zone.as_ref())),
            ("Resource group", reference(volume.resource_group.as_ref())),
            ("Attachments", attached.to_string()),
        ]);
    }

    Ok(())
}

async fn delete_volumes(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_volume()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete volume {id}"))?;
        println!("Deleted volume {id}");
    }
    Ok(())
}
