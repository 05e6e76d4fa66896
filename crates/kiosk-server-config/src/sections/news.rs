// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Upstream news provider configuration section.

use kiosk_common_secret::SecretString;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/top-headlines";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsConfigLayer {
	pub api_key: Option<SecretString>,
	pub base_url: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl NewsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> NewsConfig {
		NewsConfig {
			api_key: self.api_key,
			base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
	pub api_key: Option<SecretString>,
	pub base_url: String,
	pub timeout_secs: u64,
}

impl NewsConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}
}

impl Default for NewsConfig {
	fn default() -> Self {
		NewsConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kiosk_common_secret::Secret;

	#[test]
	fn test_default_not_configured() {
		let config = NewsConfig::default();
		assert!(!config.is_configured());
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
		assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
	}

	#[test]
	fn test_configured_with_key() {
		let config = NewsConfig {
			api_key: Some(Secret::new("key".to_string())),
			..NewsConfig::default()
		};
		assert!(config.is_configured());
	}

	#[test]
	fn test_layer_merge_keeps_existing_key() {
		let mut base = NewsConfigLayer {
			api_key: Some(Secret::new("old-key".to_string())),
			base_url: None,
			timeout_secs: Some(5),
		};
		base.merge(NewsConfigLayer {
			api_key: None,
			base_url: Some("http://localhost:9001".to_string()),
			timeout_secs: None,
		});
		assert!(base.api_key.is_some());
		assert_eq!(base.base_url.as_deref(), Some("http://localhost:9001"));
		assert_eq!(base.timeout_secs, Some(5));
	}

	#[test]
	fn test_serialize_redacts_api_key() {
		let config = NewsConfig {
			api_key: Some(Secret::new("super-secret".to_string())),
			..NewsConfig::default()
		};
		let json = serde_json::to_string(&config).unwrap();
		assert!(!json.contains("super-secret"));
	}
}
