//! # launchpad-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **launcher page** at `/`: top bar with brand and market ticker,
//!   one card per target, footer
//! - Serve static assets (background image, fonts) under `/assets`
//! - Gate both behind **HTTP Basic-Auth** checked against the credential table
//! - Expose an unauthenticated `/health` liveness endpoint
//!
//! ## Render-once approach
//! The page is rendered to HTML a single time when [`state::AppState`] is
//! built. Handlers only clone the cached bytes; nothing is probed or
//! re-rendered per request.
//!
//! ## Dependency rule
//! Depends on `launchpad-domain` for the page model. Never leaks axum types
//! into the domain.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
