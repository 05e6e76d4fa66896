// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Upstream top-headlines API client for Kiosk.
//!
//! This crate provides a typed Rust client for a NewsAPI-style top-headlines
//! endpoint, encapsulating request construction, HTTP communication, and
//! response parsing. The API credential travels only in the `X-Api-Key`
//! request header, never in URLs or log output.

pub mod client;
pub mod error;
pub mod types;

pub use client::NewsClient;
pub use error::NewsError;
pub use types::{Category, HeadlinesPage, HeadlinesQuery};
