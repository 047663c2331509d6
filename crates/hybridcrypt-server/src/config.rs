// ============================================
// File: crates/hybridcrypt-server/src/config.rs
// ============================================
//! # Server Configuration
//!
//! ## Creation Reason
//! Provides configuration management for the HybridCrypt server from a
//! TOML file, with every section optional and defaulted.
//!
//! ## Configuration Sections
//! - `network`: HTTP listen address
//! - `crypto`: RSA modulus size
//! - `limits`: payload policy, request timeout
//! - `logging`: log level
//!
//! ## Example Configuration
//! ```toml
//! [network]
//! listen_addr = "0.0.0.0:3000"
//!
//! [crypto]
//! rsa_bits = 2048
//!
//! [limits]
//! max_payload_chars = 2000
//! request_timeout_secs = 30
//!
//! [logging]
//! level = "info"
//! ```
//!
//! ## ⚠️ Important Note for Next Developer
//! - Config changes require a restart; the key pair is regenerated with it
//! - Validate config before generating keys
//!
//! ## Last Modified
//! v0.1.0 - Initial configuration implementation

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use hybridcrypt_common::types::MAX_PAYLOAD_CHARS;
use hybridcrypt_core::EngineConfig;

use crate::error::{Result, ServerError};

/// RSA modulus sizes the server accepts.
pub const SUPPORTED_RSA_BITS: [usize; 3] = [2048, 3072, 4096];

// ============================================
// ServerConfig
// ============================================

/// Main server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Network configuration.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Key pair configuration.
    #[serde(default)]
    pub crypto: CryptoConfig,

    /// Request limits.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns error if file cannot be read, parsed or validated.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        info!("Loading configuration from: {}", path_str);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServerError::config_load(&path_str, e.to_string()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ServerError::config_load(&path_str, e.to_string()))?;

        config.validate()?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Loads configuration from a string (useful for testing).
    ///
    /// # Errors
    /// Returns error if the content cannot be parsed or validated.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ServerError::config_load("<string>", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.crypto.validate()?;
        self.limits.validate()?;
        Ok(())
    }

    /// Serializes configuration to TOML string.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Returns listen address.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        self.network.listen_addr
    }

    /// Returns the engine parameters derived from this configuration.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            rsa_bits: self.crypto.rsa_bits,
            max_payload_chars: self.limits.max_payload_chars,
        }
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.limits.request_timeout_secs)
    }
}

// ============================================
// NetworkConfig
// ============================================

/// Network configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// HTTP listen address.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

impl NetworkConfig {
    fn validate(&self) -> Result<()> {
        if self.listen_addr.port() == 0 {
            return Err(ServerError::config_invalid(
                "network.listen_addr",
                "port cannot be 0",
            ));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

// ============================================
// CryptoConfig
// ============================================

/// Key pair configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// RSA modulus size in bits.
    #[serde(default = "default_rsa_bits")]
    pub rsa_bits: usize,
}

fn default_rsa_bits() -> usize {
    2048
}

impl CryptoConfig {
    fn validate(&self) -> Result<()> {
        if !SUPPORTED_RSA_BITS.contains(&self.rsa_bits) {
            return Err(ServerError::config_invalid(
                "crypto.rsa_bits",
                "must be one of 2048, 3072, 4096",
            ));
        }
        Ok(())
    }
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_bits: default_rsa_bits(),
        }
    }
}

// ============================================
// LimitsConfig
// ============================================

/// Request limits configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest payload accepted for encryption, in characters.
    #[serde(default = "default_max_payload_chars")]
    pub max_payload_chars: usize,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_max_payload_chars() -> usize {
    MAX_PAYLOAD_CHARS
}

fn default_request_timeout() -> u64 {
    30
}

impl LimitsConfig {
    fn validate(&self) -> Result<()> {
        if self.max_payload_chars == 0 || self.max_payload_chars > MAX_PAYLOAD_CHARS {
            return Err(ServerError::config_invalid(
                "limits.max_payload_chars",
                format!("must be between 1 and {MAX_PAYLOAD_CHARS}"),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ServerError::config_invalid(
                "limits.request_timeout_secs",
                "must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_payload_chars: default_max_payload_chars(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

// ============================================
// LoggingConfig
// ============================================

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================
// Tests
// ============================================
