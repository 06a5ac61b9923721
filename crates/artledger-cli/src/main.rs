// crates/artledger-cli/src/main.rs
//
// CLI entrypoint for the ArtLedger provenance registry.
//
// Initializes tracing, parses CLI arguments, loads configuration, and runs
// one registry operation against the local RocksDB data directory.

mod commands;
mod config;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use artledger_core::RegistryError;
use commands::artist::ArtistCmd;
use commands::artwork::ArtworkCmd;
use commands::authentication::{AuthenticateCmd, AuthenticationCmd};
use commands::authenticator::AuthenticatorCmd;
use commands::Context;
use config::{expand_tilde, CliConfig};
use output::OutputFormat;

/// ArtLedger CLI for artist, artwork, and authenticity records.
#[derive(Parser, Debug)]
#[command(
    name = "artledger",
    version = "0.1.0",
    about = "ArtLedger provenance registry CLI"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.artledger/config.toml")]
    config: String,

    /// Override the configured data directory.
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Override the configured owner principal (hex).
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Act as this principal (hex) instead of the key file's.
    #[arg(long = "as", global = true)]
    caller: Option<String>,

    /// Pin the clock to this height instead of the wall clock.
    #[arg(long, global = true)]
    height: Option<u64>,

    /// Print records as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the caller keypair.
    Keygen,

    /// Print the caller principal.
    Whoami,

    /// Artist records: register, verify, show.
    #[command(subcommand)]
    Artist(ArtistCmd),

    /// Artwork records: register, show, count.
    #[command(subcommand)]
    Artwork(ArtworkCmd),

    /// Authenticator records: register, verify, show.
    #[command(subcommand)]
    Authenticator(AuthenticatorCmd),

    /// Record an authenticity assessment for an artwork.
    Authenticate(AuthenticateCmd),

    /// Authenticity assessments: show.
    #[command(subcommand)]
    Authentication(AuthenticationCmd),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration from TOML file, falling back to defaults if the file
    // is not found.
    let (config, load_error) = match CliConfig::load(&cli.config) {
        Ok(cfg) => (cfg, None),
        Err(e) => (CliConfig::default(), Some(e.to_string())),
    };

    // Initialize tracing subscriber for structured logging. RUST_LOG wins
    // over the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match load_error {
        None => tracing::debug!("Loaded configuration from {}", cli.config),
        Some(e) if expand_tilde(&cli.config).exists() => {
            tracing::warn!("Could not load config from {}: {}. Using defaults.", cli.config, e)
        }
        Some(_) => tracing::warn!("No config at {}. Using defaults.", cli.config),
    }

    let ctx = Context {
        data_dir: expand_tilde(cli.data_dir.as_deref().unwrap_or(&config.data_dir)),
        keys_dir: expand_tilde(&config.keys_dir),
        owner: cli.owner.clone().or(config.owner.clone()),
        caller: cli.caller.clone(),
        height: cli.height,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        },
    };

    match run(&cli.command, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<RegistryError>() {
                Some(registry_error) => {
                    eprintln!("error: {} (code {})", registry_error, registry_error.code())
                }
                None => eprintln!("error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Keygen => commands::keys::keygen(&ctx.keys_dir)?,
        Commands::Whoami => commands::keys::whoami(&ctx.caller()?),
        Commands::Artist(cmd) => commands::artist::run(cmd, ctx)?,
        Commands::Artwork(cmd) => commands::artwork::run(cmd, ctx)?,
        Commands::Authenticator(cmd) => commands::authenticator::run(cmd, ctx)?,
        Commands::Authenticate(cmd) => commands::authentication::authenticate(cmd, ctx)?,
        Commands::Authentication(cmd) => commands::authentication::run(cmd, ctx)?,
    }

    Ok(())
}
