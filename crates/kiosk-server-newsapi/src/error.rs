// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the top-headlines API client.

use thiserror::Error;

/// Errors that can occur when interacting with the upstream provider.
#[derive(Debug, Error)]
pub enum NewsError {
	/// Network-level error during HTTP communication.
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("request timed out")]
	Timeout,

	/// The upstream answered with a non-2xx status. `message` and `code` are
	/// taken from the upstream error body when present, with generic
	/// fallbacks otherwise.
	#[error("upstream API error: {status} - {message}")]
	Api {
		status: u16,
		message: String,
		code: String,
	},

	/// The upstream answered 2xx but the body's own `status` field was not
	/// `"ok"`, violating its response contract.
	#[error("upstream contract violation: {message}")]
	ContractViolation { message: String, code: String },

	/// Invalid or unparseable response body.
	#[error("invalid response from upstream: {0}")]
	InvalidResponse(String),
}
