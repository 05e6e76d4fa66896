// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query parameter validation for the news gateway.
//!
//! Raw client parameters arrive as optional strings; validation applies
//! defaults, enforces the closed category set and the `pageSize`/`page`
//! bounds, and produces a typed query. Pure function of its input.

use kiosk_server_newsapi::{Category, HeadlinesQuery};
use serde::Deserialize;

const DEFAULT_COUNTRY: &str = "us";
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_PAGE: u32 = 1;

const MIN_PAGE_SIZE: u32 = 1;
const MAX_PAGE_SIZE: u32 = 100;

/// Raw query parameters as supplied by the client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNewsParams {
	pub country: Option<String>,
	pub category: Option<String>,
	#[serde(rename = "pageSize")]
	pub page_size: Option<String>,
	pub page: Option<String>,
	pub q: Option<String>,
}

/// Error type for parameter validation failures.
#[derive(Debug, Clone)]
pub struct ValidationError {
	pub error: String,
	pub message: String,
}

impl ValidationError {
	pub fn invalid_category() -> Self {
		let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
		Self {
			error: "invalid_category".to_string(),
			message: format!("Invalid category. Must be one of: {}", valid.join(", ")),
		}
	}

	pub fn invalid_page_size() -> Self {
		Self {
			error: "invalid_page_size".to_string(),
			message: format!("pageSize must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"),
		}
	}

	pub fn invalid_page() -> Self {
		Self {
			error: "invalid_page".to_string(),
			message: "page must be a positive integer".to_string(),
		}
	}
}

/// Validate and normalize raw client parameters into a typed query.
///
/// Defaults when a parameter is absent: `country="us"`, `category="general"`,
/// `pageSize=20`, `page=1`, no search term. An empty `q` means no search
/// term. `page` has no upper bound; the upstream provider enforces its own
/// pagination limits.
pub fn validate_news_params(raw: &RawNewsParams) -> Result<HeadlinesQuery, ValidationError> {
	let country = raw
		.country
		.clone()
		.unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

	let category = match raw.category.as_deref() {
		None => Category::default(),
		Some(s) => s
			.parse::<Category>()
			.map_err(|_| ValidationError::invalid_category())?,
	};

	let page_size = match raw.page_size.as_deref() {
		None => DEFAULT_PAGE_SIZE,
		Some(s) => {
			let n: u32 = s
				.parse()
				.map_err(|_| ValidationError::invalid_page_size())?;
			if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&n) {
				return Err(ValidationError::invalid_page_size());
			}
			n
		}
	};

	let page = match raw.page.as_deref() {
		None => DEFAULT_PAGE,
		Some(s) => {
			let n: u32 = s.parse().map_err(|_| ValidationError::invalid_page())?;
			if n < 1 {
				return Err(ValidationError::invalid_page());
			}
			n
		}
	};

	let search_term = raw.q.clone().filter(|q| !q.is_empty());

	Ok(HeadlinesQuery {
		country,
		category,
		page_size,
		page,
		search_term,
	})
}
