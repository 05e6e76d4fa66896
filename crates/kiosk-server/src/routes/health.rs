// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub upstream_configured: bool,
}

/// GET /health - Readiness check.
///
/// Reports 503 when the upstream API key is missing so deployment tooling
/// surfaces the misconfiguration instead of routing traffic to a gateway that
/// can only answer `configuration_error`.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let upstream_configured = state.news_client.is_some();

	let (http_status, status) = if upstream_configured {
		(StatusCode::OK, "ok")
	} else {
		(StatusCode::SERVICE_UNAVAILABLE, "degraded")
	};

	(
		http_status,
		Json(HealthResponse {
			status,
			version: env!("CARGO_PKG_VERSION"),
			upstream_configured,
		}),
	)
}
