//! Audio-related small types and handles.
//!
//! This module defines the command enum sent to the audio thread, the
//! `Playback` seam used by the controller, and the shared source handle.

use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub enum AudioCmd {
    /// Start (or resume) the track at the given catalog index at `volume` (0.0-1.0).
    Play { index: usize, volume: f32 },
    /// Pause the track at the given index.
    Pause(usize),
    /// Change the volume (0.0-1.0) of the track at the given index.
    SetVolume { index: usize, volume: f32 },
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Media-element primitives the controller drives.
///
/// Calls are fire-and-forget: a rejected start is logged by the
/// implementation and never reported back.
pub trait Playback {
    fn play(&self, index: usize, volume: f32);
    fn pause(&self, index: usize);
    fn set_volume(&self, index: usize, volume: f32);
}

/// Synthesis progress published by the audio thread.
#[derive(Debug, Clone, Default)]
pub struct SourceInfo {
    /// Sample rate of the output device, once the stream is open.
    pub sample_rate: Option<u32>,
    /// Per-track flag: a playable source exists for this index.
    pub ready: Vec<bool>,
    /// Set when no output device could be opened.
    pub device_error: Option<String>,
}

impl SourceInfo {
    pub fn new(len: usize) -> Self {
        Self {
            sample_rate: None,
            ready: vec![false; len],
            device_error: None,
        }
    }

    pub fn is_ready(&self, index: usize) -> bool {
        self.ready.get(index).copied().unwrap_or(false)
    }

    pub fn ready_count(&self) -> usize {
        self.ready.iter().filter(|r| **r).count()
    }
}

pub type SourceHandle = Arc<Mutex<SourceInfo>>;

/// Map a 0-100 percentage onto a sink volume.
pub fn volume_scale(percent: u8) -> f32 {
    f32::from(percent.min(100)) / 100.0
}
