// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPC CLI - command-line interface for the IBM Cloud VPC API
//!
//! # Environment Variables
//!
//! - `VPC_URL` - service URL (overrides `--region`)
//! - `VPC_REGION` - region whose public endpoint to use
//! - `VPC_BEARER_TOKEN` - IAM access token
//! - `VPC_API_VERSION` - API version date sent with every request
//! - `VPC_DISABLE_SSL` - `true` to skip TLS certificate checks
//!
//! Without a token the authenticator comes from `VPC_AUTH_TYPE`,
//! `VPC_USERNAME` and `VPC_PASSWORD`.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vpc_client::{BearerTokenAuthenticator, Client, ClientConfig};

mod commands;
mod output;

use commands::{
    FloatingIpCommand, ImageCommand, InstanceCommand, KeyCommand, LoadBalancerCommand,
    PublicGatewayCommand, RegionCommand, SecurityGroupCommand, SubnetCommand, VolumeCommand,
    VpcCommand, ZoneCommand,
};

#[derive(Parser)]
#[command(
    name = "vpc",
    version,
    about = "IBM Cloud VPC management CLI",
    long_about = "Command-line interface for the IBM Cloud VPC API"
)]
struct Cli {
    /// Service URL, e.g. https://us-south.iaas.cloud.ibm.com/v1
    #[arg(short = 'U', long, global = true, env = "VPC_URL")]
    url: Option<String>,

    /// Region whose public endpoint to use
    #[arg(short, long, global = true, env = "VPC_REGION")]
    region: Option<String>,

    /// IAM bearer token
    #[arg(short, long, global = true, env = "VPC_BEARER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API version date, e.g. 2020-11-17
    #[arg(long, global = true, env = "VPC_API_VERSION")]
    api_version: Option<String>,

    /// Skip TLS certificate verification
    #[arg(
        long,
        global = true,
        env = "VPC_DISABLE_SSL",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    disable_ssl: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage VPCs
    Vpc {
        #[command(subcommand)]
        command: VpcCommand,
    },

    /// Manage subnets
    Subnet {
        #[command(subcommand)]
        command: SubnetCommand,
    },

    /// Manage instances
    #[command(alias = "inst")]
    Instance {
        #[command(subcommand)]
        command: InstanceCommand,
    },

    /// Manage block storage volumes
    Volume {
        #[command(subcommand)]
        command: VolumeCommand,
    },

    /// Manage images
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },

    /// Manage SSH keys
    Key {
        #[command(subcommand)]
        command: KeyCommand,
    },

    /// Manage floating IPs
    #[command(alias = "fip")]
    FloatingIp {
        #[command(subcommand)]
        command: FloatingIpCommand,
    },

    /// Manage security groups
    #[command(alias = "sg")]
    SecurityGroup {
        #[command(subcommand)]
        command: SecurityGroupCommand,
    },

    /// Manage load balancers
    #[command(alias = "lb")]
    LoadBalancer {
        #[command(subcommand)]
        command: LoadBalancerCommand,
    },

    /// Manage public gateways
    #[command(alias = "pgw")]
    PublicGateway {
        #[command(subcommand)]
        command: PublicGatewayCommand,
    },

    /// List and show regions
    Region {
        #[command(subcommand)]
        command: RegionCommand,
    },

    /// List and show zones
    Zone {
        #[command(subcommand)]
        command: ZoneCommand,
    },
}

impl Cli {
    /// Build a client from the token, or from `VPC_*` variables without one
    fn build_client(&self) -> Result<Client> {
        let mut builder = match &self.token {
            Some(token) => {
                let auth = BearerTokenAuthenticator::new(token.clone())
                    .context("invalid bearer token")?;
                Client::builder().authenticator(Arc::new(auth))
            }
            None => ClientConfig::from_env("vpc")
                .context("no credentials: pass --token or set VPC_BEARER_TOKEN / VPC_AUTH_TYPE")?
                .into_builder(),
        };

        if let Some(region) = &self.region {
            builder = builder.region(region);
        }
        if let Some(url) = &self.url {
            builder = builder.service_url(url.clone());
        }
        if let Some(version) = &self.api_version {
            builder = builder.version(version.clone());
        }
        if self.disable_ssl {
            builder = builder.disable_ssl_verification(true);
        }

        builder.build().context("failed to configure VPC client")
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vpc_client=debug,vpc_pagination=debug,vpc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let client = cli.build_client()?;
    let json = cli.json;

    match cli.command {
        Commands::Vpc { command } => command.run(&client, json).await,
        Commands::Subnet { command } => command.run(&client, json).await,
        Commands::Instance { command } => command.run(&client, json).await,
        Commands::Volume { command } => command.run(&client, json).await,
        Commands::Image { command } => command.run(&client, json).await,
        Commands::Key { command } => command.run(&client, json).await,
        Commands::FloatingIp { command } => command.run(&client, json).await,
        Commands::SecurityGroup { command } => command.run(&client, json).await,
        Commands::LoadBalancer { command } => command.run(&client, json).await,
        Commands::PublicGateway { command } => command.run(&client, json).await,
        Commands::Region { command } => command.run(&client, json).await,
        Commands::Zone { command } => command.run(&client, json).await,
    }
}
