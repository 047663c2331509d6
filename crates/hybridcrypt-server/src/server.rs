// ============================================
// File: crates/hybridcrypt-server/src/server.rs
// ============================================
//! # Server Orchestrator
//!
//! ## Creation Reason
//! Owns the engine and the configuration, wires them into the HTTP
//! router and manages the listener lifecycle.
//!
//! ## Main Functionality
//! - `Server::initialize`: validate config, generate the key pair
//! - `Server::run`: bind and serve until shutdown
//! - `Server::serve`: serve on an already-bound listener
//! - `Server::shutdown`: programmatic stop
//!
//! ## Lifecycle
//! ```text
//! config ──► initialize (RSA keygen, blocking) ──► Ready
//!                                                   │
//!                           bind ◄──────────────────┘
//!                             │
//!                           serve ──► Ctrl+C / shutdown() ──► drain ──► exit
//! ```
//!
//! ## ⚠️ Important Note for Next Developer
//! - The key pair lives only in memory; a restart invalidates every
//!   previously issued `data1`
//! - Key generation happens before binding so no request ever sees an
//!   uninitialized engine
//!
//! ## Last Modified
//! v0.1.0 - Initial server implementation

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{info, warn};

use hybridcrypt_core::HybridCipher;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::handlers;
use crate::state::AppState;

// ============================================
// Server
// ============================================

/// Main HybridCrypt server.
///
/// # Lifecycle
/// 1. Create with `Server::initialize(config).await`
/// 2. Start with `server.run().await`
/// 3. Shutdown via Ctrl+C or `server.shutdown()`
pub struct Server {
    /// Server configuration.
    config: ServerConfig,
    /// The initialized engine.
    engine: Arc<HybridCipher>,
    /// Shutdown signal sender.
    shutdown_tx: broadcast::Sender<()>,
}

impl Server {
    /// Creates a server around an already-initialized engine.
    #[must_use]
    pub fn new(config: ServerConfig, engine: Arc<HybridCipher>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            config,
            engine,
            shutdown_tx,
        }
    }

    /// Validates the configuration and generates the key pair.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` for a bad configuration, or the engine's
    /// `KeyInitialization` error if key generation fails.
    pub async fn initialize(config: ServerConfig) -> Result<Self> {
        config.validate()?;

        let engine_config = config.engine_config();
        info!(rsa_bits = engine_config.rsa_bits, "Generating RSA key pair...");

        let engine = tokio::task::spawn_blocking(move || HybridCipher::initialize(&engine_config))
            .await
            .map_err(|e| ServerError::startup_failed(format!("key generation aborted: {e}")))??;

        Ok(Self::new(config, Arc::new(engine)))
    }

    /// Builds the HTTP router for this server.
    pub fn router(&self) -> Router {
        let state = AppState::new(Arc::clone(&self.engine), self.config.request_timeout());
        handlers::router(state)
    }

    /// Binds the configured address and serves until shutdown.
    ///
    /// # Errors
    /// Returns `StartupFailed` if the address cannot be bound.
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.listen_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::startup_failed(format!("failed to bind {addr}: {e}")))?;

        self.serve(listener).await
    }

    /// Serves on an already-bound listener until Ctrl+C or [`Self::shutdown`].
    ///
    /// # Errors
    /// Returns `Io` if the listener fails.
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;
        info!("Listening on http://{}", local_addr);

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let signal = async move {
            tokio::select! {
                () = wait_for_ctrl_c() => {}
                _ = shutdown_rx.recv() => {}
            }
            info!("Received shutdown signal");
        };

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Triggers server shutdown programmatically.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("listen_addr", &self.config.network.listen_addr)
            .field("engine", &self.engine)
            .finish()
    }
}

/// Resolves on Ctrl+C. If the handler cannot be installed, never resolves.
async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
