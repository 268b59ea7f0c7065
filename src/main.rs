mod check;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod network;
mod proxy;
mod runtime;
mod session;
mod ui;
mod view_state;
mod workers;

use crate::config::{Config, DashboardSettings, get_config_path};
use crate::proxy::ProxyClient;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Where the proxy lives and how to authenticate.
#[derive(ClapArgs, Debug, Clone)]
struct ConnectionArgs {
    /// Base URL of the LLM proxy, e.g. http://localhost:5000
    #[arg(long, value_name = "URL", env = "LITELLM_API_URL")]
    api_url: Option<String>,

    /// API key sent as a bearer token
    #[arg(long, value_name = "KEY", env = "LITELLM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Seconds between automatic refreshes of health and models
        #[arg(long, value_name = "SECONDS", env = "DASHBOARD_REFRESH_SECS")]
        refresh_secs: Option<u64>,

        /// Run without the terminal UI, printing events to the console
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Paint a dark background behind the dashboard
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Probe the proxy's health, liveliness, readiness and models endpoints once
    Check {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
    /// Save connection settings to the config file
    Configure {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Seconds between automatic refreshes of health and models
        #[arg(long, value_name = "SECONDS")]
        refresh_secs: Option<u64>,
    },
    /// Delete the saved config file
    Logout,
}

/// Loads the config file if there is one. A broken file is reported and ignored.
fn load_saved_config(config_path: &Path) -> Option<Config> {
    if !config_path.exists() {
        return None;
    }
    match Config::load_from_file(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            print_cmd_warn!(
                "Ignoring config file",
                "{}: {}",
                config_path.display(),
                e
            );
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            connection,
            refresh_secs,
            headless,
            with_background,
        } => {
            let saved = load_saved_config(&config_path);
            let settings = DashboardSettings::resolve(
                connection.api_url,
                connection.api_key,
                refresh_secs,
                saved.as_ref(),
            )?;
            start(settings, headless, with_background).await
        }
        Command::Check { connection } => {
            let saved = load_saved_config(&config_path);
            let settings = DashboardSettings::resolve(
                connection.api_url,
                connection.api_key,
                None,
                saved.as_ref(),
            )?;
            let client = ProxyClient::new(settings.environment, settings.api_key)?;
            check::run_check(&client).await?;
            Ok(())
        }
        Command::Configure {
            connection,
            refresh_secs,
        } => {
            // Validate before writing anything
            DashboardSettings::resolve(
                connection.api_url.clone(),
                connection.api_key.clone(),
                refresh_secs,
                None,
            )?;
            // Flags overwrite, anything not given is kept from the saved file
            let saved = load_saved_config(&config_path).unwrap_or_default();
            let config = Config::new(
                connection.api_url.or(saved.api_url),
                connection.api_key.or(saved.api_key),
                refresh_secs.or(saved.refresh_interval_secs),
            );
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Configuration saved", "{}", config_path.display());
            Ok(())
        }
        Command::Logout => {
            print_cmd_info!("Logging out", "clearing {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the dashboard.
///
/// # Arguments
/// * `settings` - Resolved proxy URL, API key and refresh interval.
/// * `headless` - If true, print events to the console instead of running the TUI.
/// * `with_background` - Whether to paint the dashboard background.
async fn start(
    settings: DashboardSettings,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(settings)?;

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}
