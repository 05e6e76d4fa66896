// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Kiosk.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header for all outbound requests.

mod client;

pub use client::{builder, new_client, new_client_with_timeout, user_agent};
