// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Kiosk news gateway server.
//!
//! This crate provides a stateless HTTP gateway in front of an upstream
//! top-headlines provider: it validates client query parameters, forwards
//! requests with a server-held API key, and maps upstream responses and
//! failures into a uniform JSON envelope.

pub mod api;
pub mod envelope;
pub mod routes;
pub mod validation;

pub use api::{create_app_state, create_router, AppState};
pub use envelope::NewsEnvelope;
pub use kiosk_server_config::ServerConfig;
