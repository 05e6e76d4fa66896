// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Version utilities for kiosk-server.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!("kiosk-server version: {}", env!("CARGO_PKG_VERSION"))
}
