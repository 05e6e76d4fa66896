// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use kiosk_server_config::ServerConfig;
use kiosk_server_newsapi::NewsClient;
use tower_http::cors::{Any, CorsLayer};

use crate::routes;

/// Application state shared across handlers.
///
/// `news_client` is `None` when the upstream API key was absent at startup;
/// the readiness decision is made once here, not per request.
#[derive(Clone)]
pub struct AppState {
	pub news_client: Option<Arc<NewsClient>>,
	pub expose_error_detail: bool,
}

/// Creates the application state from resolved configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let news_client = match &config.news.api_key {
		Some(api_key) => {
			let client = NewsClient::with_timeout(
				api_key.clone(),
				Duration::from_secs(config.news.timeout_secs),
			)
			.with_base_url(config.news.base_url.clone());
			Some(Arc::new(client))
		}
		None => {
			tracing::warn!(
				"KIOSK_SERVER_NEWS_API_KEY is not configured; /news will answer 500 configuration_error"
			);
			None
		}
	};

	AppState {
		news_client,
		expose_error_detail: config.runtime.environment.is_development(),
	}
}

/// Creates the application router.
///
/// CORS headers are attached at this level so that every response, including
/// error envelopes, is readable by cross-origin browser clients.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route(
			"/news",
			get(routes::news::get_news)
				.options(routes::news::news_preflight)
				.fallback(routes::news::news_method_not_allowed),
		)
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods([Method::GET, Method::OPTIONS])
				.allow_headers([header::CONTENT_TYPE]),
		)
		.with_state(state)
}
