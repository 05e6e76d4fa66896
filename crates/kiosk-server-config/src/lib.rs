// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Kiosk server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`KIOSK_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use kiosk_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub news: NewsConfig,
	pub logging: LoggingConfig,
	pub runtime: RuntimeConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`KIOSK_SERVER_*`)
/// 2. Config file (`/etc/kiosk/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let news = layer.news.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let runtime = layer.runtime.unwrap_or_default().finalize();

	validate_config(&news)?;

	info!(
		host = %http.host,
		port = http.port,
		environment = %runtime.environment,
		news_configured = news.is_configured(),
		news_timeout_secs = news.timeout_secs,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		news,
		logging,
		runtime,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(news: &NewsConfig) -> Result<(), ConfigError> {
	if news.timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"KIOSK_SERVER_NEWS_TIMEOUT_SECS must be at least 1".to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero_timeout_rejected() {
		let news = NewsConfigLayer {
			timeout_secs: Some(0),
			..Default::default()
		}
		.finalize();
		let result = validate_config(&news);
		assert!(result.is_err());
	}

	#[test]
	fn test_finalize_applies_defaults() {
		let config = finalize(ServerConfigLayer::default()).unwrap();
		assert_eq!(config.http.port, 8080);
		assert!(!config.news.is_configured());
		assert_eq!(config.logging.level, "info");
		assert!(!config.runtime.environment.is_development());
	}

	#[test]
	fn test_socket_addr() {
		let config = ServerConfig {
			http: HttpConfig {
				host: "127.0.0.1".to_string(),
				port: 9000,
			},
			..Default::default()
		};
		assert_eq!(config.socket_addr(), "127.0.0.1:9000");
	}
}
