// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers for loading secrets.
//!
//! Secrets may be supplied directly (`NAME=value`) or indirectly through a
//! file (`NAME_FILE=/run/secrets/name`), the convention used by container
//! orchestrators for mounted secrets.

use std::path::PathBuf;

use thiserror::Error;

use crate::SecretString;

/// Errors that can occur while loading a secret from the environment.
#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("both {var} and {file_var} are set; supply the secret through only one")]
	Conflict { var: String, file_var: String },

	#[error("failed to read secret file {path}: {source}")]
	FileRead {
		path: PathBuf,
		source: std::io::Error,
	},
}

/// Load an optional secret from `name` or `name_FILE`.
///
/// Empty values are treated as unset. File contents are trimmed of trailing
/// whitespace so `echo`-written secret files behave as expected.
pub fn load_secret_env(name: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{name}_FILE");
	let direct = std::env::var(name).ok().filter(|v| !v.is_empty());
	let file_path = std::env::var(&file_var).ok().filter(|v| !v.is_empty());

	match (direct, file_path) {
		(Some(_), Some(_)) => Err(SecretEnvError::Conflict {
			var: name.to_string(),
			file_var,
		}),
		(Some(value), None) => Ok(Some(SecretString::new(value))),
		(None, Some(path)) => {
			let path = PathBuf::from(path);
			let contents =
				std::fs::read_to_string(&path).map_err(|source| SecretEnvError::FileRead {
					path: path.clone(),
					source,
				})?;
			let trimmed = contents.trim_end().to_string();
			if trimmed.is_empty() {
				Ok(None)
			} else {
				Ok(Some(SecretString::new(trimmed)))
			}
		}
		(None, None) => Ok(None),
	}
}
