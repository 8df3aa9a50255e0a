//! Service layer containing the generation logic and side-effect helpers.
//!
//! ## Service map
//! - `params.rs` — DUT parameter file lookup.
//! - `constraint.rs` — clock table, block selection, `.pdc` rendering/writing.
//! - `config.rs` — optional `pdcgen.toml` loading and path resolution.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod constraint;
pub mod output;
pub mod params;
