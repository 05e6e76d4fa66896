// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! News gateway HTTP handlers.
//!
//! Per-request pipeline: readiness gate → parameter validation → upstream
//! call → envelope mapping. The first failing stage short-circuits with an
//! error envelope; nothing is retried.

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};

use crate::api::AppState;
use crate::envelope;
use crate::validation::{self, RawNewsParams};

/// GET /news - Proxy top headlines from the upstream provider.
pub async fn get_news(
	State(state): State<AppState>,
	Query(raw): Query<RawNewsParams>,
) -> Response {
	let Some(client) = state.news_client.as_ref() else {
		tracing::error!("get_news: upstream API key is not configured");
		return envelope::error(
			StatusCode::INTERNAL_SERVER_ERROR,
			"configuration_error",
			"Server configuration error. API key not found.",
		)
		.into_response();
	};

	let query = match validation::validate_news_params(&raw) {
		Ok(query) => query,
		Err(e) => {
			tracing::debug!(code = %e.error, "get_news: rejected invalid parameters");
			return envelope::error(StatusCode::BAD_REQUEST, e.error, e.message).into_response();
		}
	};

	match client.top_headlines(&query).await {
		Ok(page) => {
			tracing::info!(
				category = %query.category,
				country = %query.country,
				page = query.page,
				article_count = page.articles.len(),
				"get_news: returning headlines"
			);
			envelope::success(page).into_response()
		}
		Err(e) => {
			tracing::error!(
				category = %query.category,
				country = %query.country,
				page = query.page,
				error = %e,
				"get_news: upstream request failed"
			);
			envelope::from_news_error(&e, state.expose_error_detail).into_response()
		}
	}
}

/// OPTIONS /news - CORS preflight. Terminates immediately with an empty 200;
/// the CORS layer attaches the response headers.
pub async fn news_preflight() -> StatusCode {
	StatusCode::OK
}

/// Fallback for any other method on /news.
pub async fn news_method_not_allowed() -> Response {
	envelope::error(
		StatusCode::METHOD_NOT_ALLOWED,
		"method_not_allowed",
		"Method not allowed. Use GET.",
	)
	.into_response()
}
