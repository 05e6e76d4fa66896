// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Top-headlines API client implementation.

use std::time::Duration;

use kiosk_common_secret::SecretString;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::NewsError;
use crate::types::{HeadlinesPage, HeadlinesQuery};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/top-headlines";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "X-Api-Key";
const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch news from upstream";
const FALLBACK_ERROR_CODE: &str = "unknown";

/// Client for the upstream top-headlines API.
#[derive(Debug, Clone)]
pub struct NewsClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
}

/// Raw upstream response body. All fields are optional: the mapper supplies
/// defaults rather than trusting the upstream to honor its own schema.
#[derive(Debug, Default, Deserialize)]
struct UpstreamBody {
	status: Option<String>,
	message: Option<String>,
	code: Option<String>,
	#[serde(rename = "totalResults")]
	total_results: Option<u64>,
	articles: Option<Vec<serde_json::Value>>,
}

impl NewsClient {
	/// Creates a new client with the given API key and the default timeout.
	pub fn new(api_key: SecretString) -> Self {
		Self::with_timeout(api_key, DEFAULT_TIMEOUT)
	}

	/// Creates a new client with a custom upstream request timeout.
	pub fn with_timeout(api_key: SecretString, timeout: Duration) -> Self {
		let http_client = kiosk_common_http::builder()
			.timeout(timeout)
			.build()
			.expect("failed to build HTTP client");

		Self {
			http_client,
			api_key,
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Fetches one page of top headlines.
	#[instrument(skip(self), fields(category = %query.category, country = %query.country, page = query.page))]
	pub async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<HeadlinesPage, NewsError> {
		let params = query_params(query);

		debug!(url = %self.base_url, "sending top-headlines request to upstream");

		let response = self
			.http_client
			.get(&self.base_url)
			.query(&params)
			.header(API_KEY_HEADER, self.api_key.expose())
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("upstream request timed out");
					return NewsError::Timeout;
				}
				error!(error = %e, "network error during upstream request");
				NewsError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "received response from upstream");

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "failed to read upstream response body");
			NewsError::Network(e)
		})?;

		trace!(body = %body, "upstream response body");

		if !status.is_success() {
			// Best-effort parse: upstream error bodies carry `message`/`code`,
			// but a gateway or load balancer in front of it may not.
			let parsed: UpstreamBody = serde_json::from_str(&body).unwrap_or_default();
			let message = parsed
				.message
				.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
			let code = parsed
				.code
				.unwrap_or_else(|| FALLBACK_ERROR_CODE.to_string());
			error!(status = status.as_u16(), code = %code, "upstream API error");
			return Err(NewsError::Api {
				status: status.as_u16(),
				message,
				code,
			});
		}

		let parsed: UpstreamBody = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "failed to parse upstream response");
			NewsError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		if parsed.status.as_deref() != Some("ok") {
			error!(
				body_status = ?parsed.status,
				"upstream returned 2xx with non-ok body status"
			);
			return Err(NewsError::ContractViolation {
				message: parsed
					.message
					.unwrap_or_else(|| "upstream returned an error".to_string()),
				code: parsed
					.code
					.unwrap_or_else(|| "upstream_contract_violation".to_string()),
			});
		}

		let page = HeadlinesPage {
			total_results: parsed.total_results.unwrap_or(0),
			articles: parsed.articles.unwrap_or_default(),
		};

		debug!(
			article_count = page.articles.len(),
			total_results = page.total_results,
			"headlines fetched successfully"
		);

		Ok(page)
	}
}

/// Builds the outbound query string pairs for a validated query.
///
/// `country`, `category`, `pageSize`, and `page` are always present; `q` is
/// appended only when a search term exists. Kept separate from execution so
/// request construction is testable without a network.
fn query_params(query: &HeadlinesQuery) -> Vec<(&'static str, String)> {
	let mut params = vec![
		("country", query.country.clone()),
		("category", query.category.to_string()),
		("pageSize", query.page_size.to_string()),
		("page", query.page.to_string()),
	];
	if let Some(q) = &query.search_term {
		params.push(("q", q.clone()));
	}
	params
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Category;
	use httpmock::prelude::*;
	use serde_json::json;

	fn test_client(server: &MockServer) -> NewsClient {
		NewsClient::new(SecretString::from("test-api-key"))
			.with_base_url(server.url("/v2/top-headlines"))
	}

	#[test]
	fn test_client_creation() {
		let client = NewsClient::new(SecretString::from("test-api-key"));
		assert_eq!(client.api_key.expose(), "test-api-key");
		assert_eq!(client.base_url, DEFAULT_BASE_URL);
	}

	#[test]
	fn test_with_base_url() {
		let client = NewsClient::new(SecretString::from("key"))
			.with_base_url("http://localhost:9001/v2/top-headlines");
		assert_eq!(client.base_url, "http://localhost:9001/v2/top-headlines");
	}

	#[test]
	fn test_debug_output_never_contains_api_key() {
		let client = NewsClient::new(SecretString::from("super-secret-key"));
		let debug = format!("{client:?}");
		assert!(!debug.contains("super-secret-key"));
	}

	#[test]
	fn test_query_params_always_include_required_fields() {
		let params = query_params(&HeadlinesQuery::default());
		let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
		assert_eq!(keys, vec!["country", "category", "pageSize", "page"]);
	}

	#[test]
	fn test_query_params_include_q_iff_search_term_present() {
		let without = query_params(&HeadlinesQuery::default());
		assert!(!without.iter().any(|(k, _)| *k == "q"));

		let with = query_params(&HeadlinesQuery {
			search_term: Some("rust".to_string()),
			..HeadlinesQuery::default()
		});
		assert_eq!(
			with.last(),
			Some(&("q", "rust".to_string()))
		);
	}

	#[tokio::test]
	async fn test_top_headlines_success() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path("/v2/top-headlines")
					.header(API_KEY_HEADER, "test-api-key")
					.query_param("country", "us")
					.query_param("category", "technology")
					.query_param("pageSize", "5")
					.query_param("page", "1");
				then.status(200).json_body(json!({
					"status": "ok",
					"totalResults": 37,
					"articles": [
						{"title": "a"}, {"title": "b"}, {"title": "c"},
						{"title": "d"}, {"title": "e"}
					]
				}));
			})
			.await;

		let client = test_client(&server);
		let page = client
			.top_headlines(&HeadlinesQuery {
				category: Category::Technology,
				page_size: 5,
				..HeadlinesQuery::default()
			})
			.await
			.unwrap();

		mock.assert_async().await;
		assert_eq!(page.total_results, 37);
		assert_eq!(page.articles.len(), 5);
	}

	#[tokio::test]
	async fn test_top_headlines_defaults_missing_fields() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/v2/top-headlines");
				then.status(200).json_body(json!({"status": "ok"}));
			})
			.await;

		let client = test_client(&server);
		let page = client
			.top_headlines(&HeadlinesQuery::default())
			.await
			.unwrap();

		assert_eq!(page.total_results, 0);
		assert!(page.articles.is_empty());
	}

	#[tokio::test]
	async fn test_top_headlines_error_status_passes_through_body() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/v2/top-headlines");
				then.status(401).json_body(json!({
					"status": "error",
					"code": "apiKeyInvalid",
					"message": "Your API key is invalid"
				}));
			})
			.await;

		let client = test_client(&server);
		let err = client
			.top_headlines(&HeadlinesQuery::default())
			.await
			.unwrap_err();

		match err {
			NewsError::Api {
				status,
				message,
				code,
			} => {
				assert_eq!(status, 401);
				assert_eq!(message, "Your API key is invalid");
				assert_eq!(code, "apiKeyInvalid");
			}
			other => panic!("expected Api error, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_top_headlines_error_status_with_unparseable_body() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/v2/top-headlines");
				then.status(502).body("bad gateway");
			})
			.await;

		let client = test_client(&server);
		let err = client
			.top_headlines(&HeadlinesQuery::default())
			.await
			.unwrap_err();

		match err {
			NewsError::Api {
				status,
				message,
				code,
			} => {
				assert_eq!(status, 502);
				assert_eq!(message, FALLBACK_ERROR_MESSAGE);
				assert_eq!(code, FALLBACK_ERROR_CODE);
			}
			other => panic!("expected Api error, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_top_headlines_contract_violation() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/v2/top-headlines");
				then.status(200).json_body(json!({
					"status": "error",
					"code": "rateLimited",
					"message": "Too many requests"
				}));
			})
			.await;

		let client = test_client(&server);
		let err = client
			.top_headlines(&HeadlinesQuery::default())
			.await
			.unwrap_err();

		match err {
			NewsError::ContractViolation { message, code } => {
				assert_eq!(message, "Too many requests");
				assert_eq!(code, "rateLimited");
			}
			other => panic!("expected ContractViolation, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_top_headlines_invalid_json_body() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/v2/top-headlines");
				then.status(200).body("not json");
			})
			.await;

		let client = test_client(&server);
		let err = client
			.top_headlines(&HeadlinesQuery::default())
			.await
			.unwrap_err();

		assert!(matches!(err, NewsError::InvalidResponse(_)));
	}

	#[tokio::test]
	async fn test_top_headlines_connection_refused() {
		// Port 9 (discard) is assumed closed.
		let client = NewsClient::new(SecretString::from("key"))
			.with_base_url("http://127.0.0.1:9/v2/top-headlines");
		let err = client
			.top_headlines(&HeadlinesQuery::default())
			.await
			.unwrap_err();

		assert!(matches!(err, NewsError::Network(_) | NewsError::Timeout));
	}

	#[tokio::test]
	async fn test_search_term_is_forwarded() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path("/v2/top-headlines")
					.query_param("q", "rust language");
				then.status(200).json_body(json!({"status": "ok"}));
			})
			.await;

		let client = test_client(&server);
		client
			.top_headlines(&HeadlinesQuery {
				search_term: Some("rust language".to_string()),
				..HeadlinesQuery::default()
			})
			.await
			.unwrap();

		mock.assert_async().await;
	}
}
