// ============================================
// File: crates/hybridcrypt-server/src/main.rs
// ============================================
//! # HybridCrypt Server Entry Point
//!
//! ## Creation Reason
//! Main entry point for the HybridCrypt server binary.
//! Handles CLI parsing, logging setup, and server initialization.
//!
//! ## Usage
//! ```bash
//! hybridcrypt-server start --config /etc/hybridcrypt/server.toml
//! hybridcrypt-server validate --config ./server.toml
//! hybridcrypt-server public-key --bits 2048   # throwaway pair, prints SPKI PEM
//! ```
//!
//! ## Exit Codes
//! - `0`: success
//! - `1`: runtime failure
//! - `2`: configuration could not be loaded or is invalid
//! - `3`: startup failure (key generation, socket bind)
//!
//! ## ⚠️ Important Note for Next Developer
//! - A missing config file means defaults, not an error
//! - `RUST_LOG` overrides `logging.level`
//! - Logging starts at `info` before the config is read and is reloaded
//!   with `logging.level` afterwards; logs go to stderr
//!
//! ## Last Modified
//! v0.1.0 - Initial CLI implementation
//! v0.1.1 - Logging before config load, exit codes by error class

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use hybridcrypt_core::{EngineConfig, HybridCipher};
use hybridcrypt_server::{Server, ServerConfig, ServerError};

/// Handle for swapping the log filter once the config is known.
type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Level used until the config has been read.
const BOOTSTRAP_LOG_LEVEL: &str = "info";
/// Level for the one-shot subcommands.
const QUIET_LOG_LEVEL: &str = "warn";

// ============================================
// CLI Definition
// ============================================

/// HybridCrypt encryption server
#[derive(Parser, Debug)]
#[command(name = "hybridcrypt-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the server
    Start {
        /// Path to configuration file
        #[arg(short, long, default_value = "/etc/hybridcrypt/server.toml")]
        config: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = "/etc/hybridcrypt/server.toml")]
        config: PathBuf,
    },

    /// Generate a throwaway key pair and print its public key
    PublicKey {
        /// RSA modulus size in bits
        #[arg(short, long, default_value_t = 2048)]
        bits: usize,
    },
}

// ============================================
// Main
// ============================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let log_handle = init_logging(BOOTSTRAP_LOG_LEVEL);

    let result = match cli.command {
        Commands::Start { config } => cmd_start(config, log_handle.as_ref()).await,
        Commands::Validate { config } => cmd_validate(config, log_handle.as_ref()).await,
        Commands::PublicKey { bits } => cmd_public_key(bits, log_handle.as_ref()).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code(&e));
    }
}

// ============================================
// Commands
// ============================================

/// Starts the HTTP server.
async fn cmd_start(config_path: PathBuf, log_handle: Option<&LogHandle>) -> anyhow::Result<()> {
    let config = load_config(&config_path).await?;
    apply_log_level(log_handle, &config.logging.level);

    info!("Starting HybridCrypt server...");
    let server = Server::initialize(config).await?;
    info!("Key pair ready");

    server.run().await?;
    Ok(())
}

/// Validates the configuration file and prints a summary.
async fn cmd_validate(config_path: PathBuf, log_handle: Option<&LogHandle>) -> anyhow::Result<()> {
    apply_log_level(log_handle, QUIET_LOG_LEVEL);

    if !config_path.exists() {
        println!("⚠️  Config file not found: {}", config_path.display());
        println!("   Server will use default values.");
        return Ok(());
    }

    let config = ServerConfig::load(&config_path).await?;

    println!("✅ Configuration is valid");
    println!();
    println!("Network:");
    println!("   Listen:           {}", config.listen_addr());
    println!();
    println!("Crypto:");
    println!("   RSA bits:         {}", config.crypto.rsa_bits);
    println!();
    println!("Limits:");
    println!("   Max payload:      {} chars", config.limits.max_payload_chars);
    println!("   Request timeout:  {}s", config.limits.request_timeout_secs);
    println!();

    Ok(())
}

/// Prints the SPKI PEM of a freshly generated key pair.
async fn cmd_public_key(bits: usize, log_handle: Option<&LogHandle>) -> anyhow::Result<()> {
    apply_log_level(log_handle, QUIET_LOG_LEVEL);

    let engine_config = EngineConfig {
        rsa_bits: bits,
        ..EngineConfig::default()
    };
    let engine =
        tokio::task::spawn_blocking(move || HybridCipher::initialize(&engine_config)).await??;

    print!("{}", engine.public_key_pem());
    Ok(())
}

// ============================================
// Helpers
// ============================================

/// Initializes the logging system with a reloadable filter.
///
/// Returns `None` if a global subscriber was already installed.
fn init_logging(level: &str) -> Option<LogHandle> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .ok()
        .map(|()| handle)
}

/// Switches the log level, unless `RUST_LOG` is set.
fn apply_log_level(handle: Option<&LogHandle>, level: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }
    if let Some(handle) = handle {
        if let Err(e) = handle.reload(EnvFilter::new(level)) {
            warn!("Failed to apply log level '{}': {}", level, e);
        }
    }
}

/// Maps a command failure to the process exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ServerError>() {
        Some(e) if e.is_config_error() => 2,
        Some(e) if e.is_fatal() => 3,
        _ => 1,
    }
}

/// Loads config, falling back to defaults when the file is absent.
async fn load_config(path: &PathBuf) -> anyhow::Result<ServerConfig> {
    if path.exists() {
        Ok(ServerConfig::load(path).await?)
    } else {
        Ok(ServerConfig::default())
    }
}
