//! # launchpad-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** adapters must implement:
//!   - `ReachabilityProbe`: one-shot "is this URL live?" check
//! - Define the **driving/inbound** use-case:
//!   - `LauncherService`: decide availability per target and build the `Page`
//!
//! ## Dependency rule
//! Depends on `launchpad-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
