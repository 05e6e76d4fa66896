// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response types for the top-headlines API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// News category accepted by the upstream provider. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Business,
	Entertainment,
	#[default]
	General,
	Health,
	Science,
	Sports,
	Technology,
}

impl Category {
	pub const ALL: [Category; 7] = [
		Category::Business,
		Category::Entertainment,
		Category::General,
		Category::Health,
		Category::Science,
		Category::Sports,
		Category::Technology,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Business => "business",
			Category::Entertainment => "entertainment",
			Category::General => "general",
			Category::Health => "health",
			Category::Science => "science",
			Category::Sports => "sports",
			Category::Technology => "technology",
		}
	}
}

impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing a string that is not a known category.
#[derive(Debug, Clone, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for Category {
	type Err = UnknownCategory;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Category::ALL
			.iter()
			.find(|c| c.as_str() == s)
			.copied()
			.ok_or_else(|| UnknownCategory(s.to_string()))
	}
}

/// A validated top-headlines query.
///
/// Invariants are established by the caller (the gateway's parameter
/// validator): `1 <= page_size <= 100` and `page >= 1`. A `search_term`, when
/// present, is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
	pub country: String,
	pub category: Category,
	pub page_size: u32,
	pub page: u32,
	pub search_term: Option<String>,
}

impl Default for HeadlinesQuery {
	fn default() -> Self {
		Self {
			country: "us".to_string(),
			category: Category::default(),
			page_size: 20,
			page: 1,
			search_term: None,
		}
	}
}

/// One page of headlines from the upstream provider.
///
/// Articles are passed through as raw JSON: the gateway forwards whatever the
/// upstream supplies without reshaping it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadlinesPage {
	pub total_results: u64,
	pub articles: Vec<serde_json::Value>,
}
