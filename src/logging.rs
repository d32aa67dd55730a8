// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats via environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

//! Structured logging configuration built on `tracing`

use anyhow::Result;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG` for the level filter and `LOG_FORMAT` for the output
    /// format (`json`, `compact`, anything else selects pretty).
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber is already installed or the level
    /// filter cannot be parsed.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)?;

        match self.format {
            LogFormat::Json => {
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()?;
            }
            LogFormat::Pretty => {
                let layer = tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()?;
            }
            LogFormat::Compact => {
                let layer = tracing_subscriber::fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()?;
            }
        }

        Ok(())
    }
}
