// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Region and zone commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::Client;

use crate::output::print_json;
use crate::output::table::{create_table, print_details, print_table};

#[derive(Subcommand, Clone)]
pub enum RegionCommand {
    /// List regions
    #[command(alias = "ls")]
    List,
    /// Get region details
    Get(RegionGetArgs),
}

#[derive(Args, Clone)]
pub struct RegionGetArgs {
    /// Region name, e.g. us-south
    pub name: String,
}

#[derive(Subcommand, Clone)]
pub enum ZoneCommand {
    /// List the zones of a region
    #[command(alias = "ls")]
    List(ZoneListArgs),
    /// Get zone details
    Get(ZoneGetArgs),
}

#[derive(Args, Clone)]
pub struct ZoneListArgs {
    /// Region name
    pub region: String,
}

#[derive(Args, Clone)]
pub struct ZoneGetArgs {
    /// Region name
    pub region: String,
    /// Zone name, e.g. us-south-1
    pub name: String,
}

impl RegionCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List => {
                let regions = client
                    .list_regions()
                    .send()
                    .await
                    .context("failed to list regions")?
                    .into_inner()
                    .regions;

                if use_json {
                    print_json(&regions)?;
                } else {
                    let mut table = create_table(&["NAME", "ENDPOINT", "STATUS"]);
                    for region in &regions {
                        table.add_row(vec![
                            region.name.clone(),
                            region.endpoint.clone(),
                            region.status.to_string(),
                        ]);
                    }
                    print_table(table);
                }
                Ok(())
            }
            Self::Get(args) => {
                let region = client
                    .get_region()
                    .name(&args.name)
                    .send()
                    .await
                    .with_context(|| format!("failed to get region {}", args.name))?
                    .into_inner();

                if use_json {
                    print_json(&region)?;
                } else {
                    print_details(&[
                        ("Name", region.name.clone()),
                        ("Endpoint", region.endpoint.clone()),
                        ("Status", region.status.to_string()),
                    ]);
                }
                Ok(())
            }
        }
    }
}

impl ZoneCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => {
                let zones = client
                    .list_region_zones()
                    .region_name(&args.region)
                    .send()
                    .await
                    .with_context(|| format!("failed to list zones of {}", args.region))?
                    .into_inner()
                    .zones;

                if use_json {
                    print_json(&zones)?;
                } else {
                    let mut table = create_table(&["NAME", "REGION", "STATUS"]);
                    for zone in &zones {
                        table.add_row(vec![
                            zone.name.clone(),
                            zone.region.name.clone(),
                            zone.status.to_string(),
                        ]);
                    }
                    print_table(table);
                }
                Ok(())
            }
            Self::Get(args) => {
                let zone = client
                    .get_region_zone()
                    .region_name(&args.region)
                    .name(&args.name)
                    .send()
                    .await
                    .with_context(|| format!("failed to get zone {}", args.name))?
                    .into_inner();

                if use_json {
                    print_json(&zone)?;
                } else {
                    print_details(&[
                        ("Name", zone.name.clone()),
                        ("Region", zone.region.name.clone()),
                        ("Status", zone.status.to_string()),
                    ]);
                }
                Ok(())
            }
        }
    }
}
