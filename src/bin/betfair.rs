use anyhow::{Context, Result};
use betfair_rest::dto::{EventResult, MarketFilter, Query};
use betfair_rest::{Config, CredentialKind, EndpointRegistry, Session, Visitor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "betfair")]
#[command(about = "Betfair Exchange REST CLI", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the session token
    Login,
    /// List registered developer applications
    Apps,
    /// Show account funds
    Funds,
    /// Show account details
    Details,
    /// List events
    Events {
        /// Event type IDs to filter by (e.g. 1 for Soccer)
        #[arg(short, long)]
        event_type_id: Vec<String>,
        /// Free text search
        #[arg(short, long)]
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    let session = open_session(&config).await?;

    match cli.command {
        Commands::Login => {
            println!("{}", session.token());
        }
        Commands::Apps => {
            for app in session.get_developer_app_keys().await? {
                println!("{} ({})", app.app_name, app.app_id);
                for version in &app.app_versions {
                    println!(
                        "  {} delayed={} active={} key={}",
                        version.version,
                        version.delayed_data,
                        version.active,
                        version.application_key
                    );
                }
            }
        }
        Commands::Funds => {
            let funds = session.get_account_funds().await?;
            println!("{}", serde_json::to_string_pretty(&funds)?);
        }
        Commands::Details => {
            let details = session.get_account_details().await?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        Commands::Events {
            event_type_id,
            text,
        } => {
            let filter = MarketFilter {
                event_type_ids: (!event_type_id.is_empty()).then_some(event_type_id),
                text_query: text,
                ..Default::default()
            };
            let print: Visitor<'_, EventResult> = &|_, _, events| {
                for result in events {
                    println!(
                        "{}\t{}\t{} markets",
                        result.event.id, result.event.name, result.market_count
                    );
                }
            };
            let events = session.list_events(&Query::with_filter(filter), &[print]).await?;
            info!("{} events", events.len());
        }
    }

    Ok(())
}

async fn open_session(config: &Config) -> Result<Session> {
    let credentials = config.credentials()?;
    let mut session = Session::login(
        &credentials,
        Arc::new(EndpointRegistry::betfair()),
        &config.transport_config(),
    )
    .await?;

    if session.kind() == CredentialKind::NonInteractive {
        match (&config.betfair.app_key, &config.betfair.app_name) {
            (Some(key), _) => session.set_application_key(key.as_str()),
            (None, Some(name)) => {
                session
                    .set_used_application(name, config.betfair.delayed_data)
                    .await?
            }
            (None, None) => anyhow::bail!("app_key or app_name is required for certificate login"),
        }
    }

    Ok(session)
}
