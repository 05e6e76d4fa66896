// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Partial configuration layer produced by each source.

use serde::{Deserialize, Serialize};

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, NewsConfigLayer, RuntimeConfigLayer};

/// One source's view of the configuration. Every field is optional; layers
/// from higher-precedence sources are merged over lower ones field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub news: Option<NewsConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub runtime: Option<RuntimeConfigLayer>,
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_http) = other.http {
			self.http.get_or_insert_with(Default::default).merge(other_http);
		}
		if let Some(other_news) = other.news {
			self.news.get_or_insert_with(Default::default).merge(other_news);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
		if let Some(other_runtime) = other.runtime {
			self.runtime
				.get_or_insert_with(Default::default)
				.merge(other_runtime);
		}
	}
}
