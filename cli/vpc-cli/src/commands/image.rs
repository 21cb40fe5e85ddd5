// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use vpc_client::types::ImageVisibility;
use vpc_client::{Client, ListRequest};

use super::{DeleteArgs, GetArgs, PageArgs};
use crate::output::print_json;
use crate::output::table::{create_table, opt, print_details, print_table};

#[derive(Subcommand, Clone)]
pub enum ImageCommand {
    /// List images
    #[command(alias = "ls")]
    List(ImageListArgs),
    /// Get image details
    Get(GetArgs),
    /// Delete image(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct ImageListArgs {
    #[command(flatten)]
    pub page: PageArgs,
    /// Only the image with this name
    #[arg(long)]
    pub name: Option<String>,
    /// Only `public` or `private` images
    #[arg(long)]
    pub visibility: Option<ImageVisibility>,
}

impl ImageCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_images(args, client, use_json).await,
            Self::Get(args) => get_image(args, client, use_json).await,
            Self::Delete(args) => delete_images(args, client).await,
        }
    }
}

async fn list_images(args: ImageListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut request = client.list_images();
    if let Some(limit) = args.page.limit {
        request = request.limit(limit);
    }
    if let Some(group) = args.page.resource_group {
        request = request.resource_group_id(group);
    }
    if let Some(name) = args.name {
        request = request.name(name);
    }
    if let Some(visibility) = args.visibility {
        request = request.visibility(visibility);
    }

    let images = request.collect_all().await.context("failed to list images")?;

    if use_json {
        print_json(&images)?;
    } else {
        let mut table = create_table(&["ID", "NAME", "OS", "ARCH", "VISIBILITY", "STATUS"]);
        for image in &images {
            let os = image.operating_system.as_ref();
            table.add_row(vec![
                image.id.clone(),
                image.name.clone(),
                opt(os.map(|os| &os.name)),
                opt(os.and_then(|os| os.architecture.as_deref())),
                opt(image.visibility),
                opt(image.status),
            ]);
        }
        print_table(table);
    }

    Ok(())
}

async fn get_image(args: GetArgs, client: &Client, use_json: bool) -> Result<()> {
    let image = client
        .get_image()
        .id(&args.id)
        .send()
        .await
        .with_context(|| format!("failed to get image {}", args.id))?
        .into_inner();

    if use_json {
        print_json(&image)?;
    } else {
        let os = image.operating_system.as_ref();
        print_details(&[
            ("ID", image.id.clone()),
            ("Name", image.name.clone()),
            ("Status", opt(image.status)),
            ("Visibility", opt(image.visibility)),
            ("OS", opt(os.and_then(|os| os.display_name.as_deref()))),
            ("Encryption", opt(image.encryption)),
            ("Minimum size (GB)", opt(image.minimum_provisioned_size)),
            ("Created", opt(image.created_at)),
        ]);
    }

    Ok(())
}

async fn delete_images(args: DeleteArgs, client: &Client) -> Result<()> {
    for id in &args.ids {
        client
            .delete_image()
            .id(id)
            .send()
            .await
            .with_context(|| format!("failed to delete image {id}"))?;
        println!("Deleted image {id}");
    }
    Ok(())
}
