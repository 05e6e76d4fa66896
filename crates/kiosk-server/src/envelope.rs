// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The uniform response envelope returned to clients.
//!
//! Every `/news` response, success or failure, is one of two shapes keyed on
//! `status` so the browser UI always has a decodable body:
//!
//! ```text
//! { "status": "ok", "totalResults": 37, "articles": [ ... ] }
//! { "status": "error", "message": "...", "code": "..." }
//! ```

use axum::{http::StatusCode, Json};
use kiosk_server_newsapi::{HeadlinesPage, NewsError};
use serde::{Deserialize, Serialize};

const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Failed to fetch news. Please try again later.";

/// Client-facing response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NewsEnvelope {
	Ok {
		#[serde(rename = "totalResults")]
		total_results: u64,
		articles: Vec<serde_json::Value>,
	},
	Error {
		message: String,
		code: String,
	},
}

/// 200 success envelope from a fetched page.
pub fn success(page: HeadlinesPage) -> (StatusCode, Json<NewsEnvelope>) {
	(
		StatusCode::OK,
		Json(NewsEnvelope::Ok {
			total_results: page.total_results,
			articles: page.articles,
		}),
	)
}

/// Error envelope with an explicit status, code, and message.
pub fn error(
	status: StatusCode,
	code: impl Into<String>,
	message: impl Into<String>,
) -> (StatusCode, Json<NewsEnvelope>) {
	(
		status,
		Json(NewsEnvelope::Error {
			message: message.into(),
			code: code.into(),
		}),
	)
}

/// Map an upstream client error into an HTTP status and error envelope.
///
/// Upstream HTTP errors pass their status, message, and code through to the
/// client. Contract violations and transport failures become 500s; transport
/// failure detail is exposed only when `expose_detail` is set (development
/// environments), never in production.
pub fn from_news_error(err: &NewsError, expose_detail: bool) -> (StatusCode, Json<NewsEnvelope>) {
	match err {
		NewsError::Api {
			status,
			message,
			code,
		} => error(
			StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
			code.clone(),
			message.clone(),
		),
		NewsError::ContractViolation { message, code } => error(
			StatusCode::INTERNAL_SERVER_ERROR,
			code.clone(),
			message.clone(),
		),
		NewsError::Network(_) | NewsError::Timeout | NewsError::InvalidResponse(_) => {
			let message = if expose_detail {
				format!("{UPSTREAM_UNAVAILABLE_MESSAGE} ({err})")
			} else {
				UPSTREAM_UNAVAILABLE_MESSAGE.to_string()
			};
			error(
				StatusCode::INTERNAL_SERVER_ERROR,
				"upstream_unavailable",
				message,
			)
		}
	}
}
