//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — parameter set, clock periods, report structs.
//! - `constants.rs` — parameter names, default paths, clock table and the
//!   literal `.pdc` template lines.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs define the `--json` output; the template lines define the
//! generated constraint file. Changes to either are user-visible.

pub mod constants;
pub mod models;
