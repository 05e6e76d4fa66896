// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime environment configuration section.
//!
//! The environment controls error-detail verbosity: development responses may
//! include underlying upstream error messages, production responses never do.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	Development,
	#[default]
	Production,
}

impl Environment {
	pub fn is_development(&self) -> bool {
		matches!(self, Environment::Development)
	}
}

impl std::fmt::Display for Environment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Environment::Development => write!(f, "development"),
			Environment::Production => write!(f, "production"),
		}
	}
}

impl std::str::FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"development" => Ok(Environment::Development),
			"production" => Ok(Environment::Production),
			_ => Err(ConfigError::InvalidValue {
				key: "environment".to_string(),
				message: format!("unknown environment '{s}', expected 'development' or 'production'"),
			}),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfigLayer {
	pub environment: Option<Environment>,
}

impl RuntimeConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.environment.is_some() {
			self.environment = other.environment;
		}
	}

	pub fn finalize(self) -> RuntimeConfig {
		RuntimeConfig {
			environment: self.environment.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
	pub environment: Environment,
}
