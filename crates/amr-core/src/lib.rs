//! `amr-core` — foundational types for the `rust_amr` colony simulator.
//!
//! This crate is a dependency of every other `amr-*` crate.  It has no
//! `amr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Point`, `Domain` (the bounded 2D colony plate)       |
//! | [`time`]        | `Tick`, `RunConfig`                                   |
//! | [`rng`]         | `RandomSource` trait, `SimRng` (seeded `SmallRng`)    |
//! | [`error`]       | `AmrError`, `AmrResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AmrError, AmrResult};
pub use geo::{Domain, Point};
pub use ids::AgentId;
pub use rng::{RandomSource, SimRng};
pub use time::{RunConfig, Tick};
