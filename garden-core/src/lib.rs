//! Core 2-D node garden simulation library.
//!
//! Main components:
//! - [`node`] — individual drifting nodes (position, velocity, mass, polarity).
//! - [`garden`] — the world state: viewport dimensions and the node collection.
//! - [`config`] — global configuration for the physics constants.
//! - [`links`] — per-tick buffer of pairwise interactions for rendering.
//! - [`phases`] — high-level simulation phases / per-tick pipeline.

pub mod config;
pub mod garden;
pub mod links;
pub mod node;
pub mod phases;
