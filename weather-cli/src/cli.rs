use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::info;
use weather_core::{
    Aggregator, Config, DisplayUnit, HttpLookupClient, LookupService, Session,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup: server and terminal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and client endpoint.
    Configure,

    /// Run the lookup endpoint over HTTP.
    Serve {
        /// Address to bind, overriding the configured one.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Look up a city and print the dashboard.
    Show {
        /// City name, passed through as typed.
        city: String,

        /// Temperature unit: c or f.
        #[arg(long, default_value = "c")]
        unit: DisplayUnit,

        /// Lookup endpoint base URL, overriding the configured one.
        #[arg(long, conflicts_with = "local")]
        endpoint: Option<String>,

        /// Query OpenWeather directly instead of going through a server.
        #[arg(long)]
        local: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Serve { bind } => {
                let mut config = Config::load()?;
                if let Some(bind) = bind {
                    config.server.bind = bind;
                }
                weather_server::serve(&config).await
            }
            Command::Show { city, unit, endpoint, local } => {
                let mut config = Config::load()?;
                if local {
                    show(Aggregator::from_config(&config)?, &city, unit).await;
                } else {
                    if let Some(endpoint) = endpoint {
                        config.client.endpoint = endpoint;
                    }
                    show(HttpLookupClient::from_config(&config)?, &city, unit).await;
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    let endpoint = Text::new("Lookup endpoint:")
        .with_default(&config.client.endpoint)
        .prompt()
        .context("Failed to read endpoint")?;
    config.client.endpoint = endpoint;

    config.save()?;
    info!(path = %Config::config_file_path()?.display(), "configuration saved");
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show<S: LookupService>(service: S, city: &str, unit: DisplayUnit) {
    let session = Session::new(service);
    session.set_unit(unit);
    session.set_input(city);
    session.submit_input().await;

    let today = chrono::Local::now().date_naive();
    print!("{}", render::render(&session.view(), session.unit(), today));
}
