//! Static catalog of ambient tracks and presets.
//!
//! Tracks are defined once at startup and never removed. Each carries the
//! base frequency used to synthesize its placeholder audio.

mod builtin;
mod model;

pub use builtin::{PRESETS, TRACKS};
pub use model::*;
