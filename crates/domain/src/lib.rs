//! # launchpad-domain
//!
//! Pure domain model for the launchpad portal.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define the **Credential Table** (who may see the portal)
//! - Define **Targets** and the ordered **Target Registry** (what the portal links to)
//! - Define **Availability** and the status derivation rule (`PROD` / `COMING SOON`)
//! - Define **Cards**, the **Theme** and the rendered **Page** model
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod card;
pub mod credential;
pub mod page;
pub mod status;
pub mod target;
pub mod theme;
