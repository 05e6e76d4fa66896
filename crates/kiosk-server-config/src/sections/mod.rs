// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod http;
mod logging;
mod news;
mod runtime;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use news::{NewsConfig, NewsConfigLayer};
pub use runtime::{Environment, RuntimeConfig, RuntimeConfigLayer};
