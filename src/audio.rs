//! Audio playback subsystem.
//!
//! A dedicated thread owns the `rodio` output stream and one `Sink` per
//! catalog track. The UI talks to it through `AudioPlayer`, which
//! implements the `Playback` trait used by the mixer controller.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::*;
