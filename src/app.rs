//! Application module: session state and the playback controller.
//!
//! The `App` model lives in `app::model` and owns the track list, the
//! favorites, mix-mode, the active preset and the sleep timer.

mod model;
mod timer;

pub use model::*;
pub use timer::SleepTimer;

#[cfg(test)]
mod tests;
