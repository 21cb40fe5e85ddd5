// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SSH key management commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, opt, print_details, print_table};

#[derive(Subcommand, Clone)]
pub enum KeyCommand {
    /// List SSH keys
    #[command(alias = "ls")]
    List(KeyListArgs),
    /// Get SSH key details
    Get(GetArgs),
    /// Add SSH key
    Add(KeyAddArgs),
    /// Delete SSH key(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct KeyListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Clone)]
pub struct KeyAddArgs {
    /// Key name (generated by the service when omitted)
    #[arg(short, long)]
    pub name: Option<String>,
    /// Public key file path (or read from stdin if not provided)
    pub file: Option<String>,
}

impl KeyCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_keys(args, client, use_json).await,
            Self::Get(args) => get_key(args, client, use_json).await,
            Self::Add(args) => add_key(args, client, use_json).await,
            Self::Delete(args) => delete_keys(args, client).await,
        }
    }
}

async fn list_keys(args: KeyListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut request = client.list_keys();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }

    let keys = request.collect_all().await.context("failed to list keys")?;

    if use_json {
        print_json(&keys)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "TYPE", "LENGTH", "FINGERPRINT"]);
        for key in &keys {
            table.add_row(vec![
                key.id.clone(),
                key.name.clone(),
                opt(key.key_type),
                opt(key.length),
                opt(key.fingerprint.as_deref()),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_key(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let key = client
        .get_key()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get key {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&key)?;
    } else {
        print_details(&[
            ("ID", key.id.clone()),
            ("Name", key.name.clone()),
            ("Type", opt(key.key_type)),
            ("Length", opt(key.length)),
            ("Fingerprint", opt(key.fingerprint.as_deref())),
            ("Key", opt(key.public_key.as_deref())),
        ]);
    }

    Ok(())
}

async fn add_key(args: KeyAddArgs, client: &Client, use_json: bool) -> Result<()> {
    // Read key from file or stdin
    let key_content = if let Some(file) = &args.file {
        std::fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?
    } else {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let mut request = client.create_key().public_key(key_content.trim());
    if let Some(name) = args.name {
        request = request.name(name);
    }

    let key = request
        .send()
        .await
        .context("failed to add key")?
        .into_inner();

    if use_json {
        print_json(&key)?;
    } else {
        println!(
            "Added key '{}' ({})",
            key.name,
            key.fingerprint.as_deref().unwrap_or(&key.id)
        );
    }

    Ok(())
}

async fn delete_keys(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_key()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete key {id}"))?;
        println!("Deleted key {id}");
    }
    Ok(())
}
