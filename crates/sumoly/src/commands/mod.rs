//! Command dispatch: build one client, hand it to the subcommand.

use std::time::Duration;

use tracing::debug;
use url::Url;

use sumoly_api::{Client, TransportConfig};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::config;
use crate::error::CliError;

pub mod access_keys;
pub mod collectors;
pub mod sources;

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli.global).await?;
    match cli.command {
        Command::Collectors { command } => collectors::run(&client, command).await,
        Command::Sources { command } => sources::run(&client, command).await,
        Command::AccessKeys { command } => access_keys::run(&client, command).await,
    }
}

async fn build_client(global: &GlobalOpts) -> Result<Client, CliError> {
    let file = config::load_file_config()?;
    let credentials = config::resolve_credentials(global, &file)?;
    let transport = TransportConfig {
        timeout: Duration::from_secs(global.timeout),
        ..TransportConfig::default()
    };

    // an explicit endpoint skips the discovery probe entirely
    let endpoint = global.endpoint.as_deref().or(file.endpoint.as_deref());
    match endpoint {
        Some(endpoint) => {
            debug!(endpoint, "using explicit endpoint, skipping discovery");
            let url = Url::parse(endpoint)
                .map_err(|e| CliError::Config(format!("invalid endpoint {endpoint:?}: {e}")))?;
            let http = transport.build_client().map_err(CliError::Api)?;
            Ok(Client::with_endpoint(http, credentials, url))
        }
        None => Ok(Client::connect(credentials, &transport).await?),
    }
}
