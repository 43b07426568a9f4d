//! Application model types: `App` and `Track`.
//!
//! The `App` struct holds the track list and session flags used by the UI
//! and runtime. Controller operations mutate that state and mirror every
//! change onto a `Playback` implementation.

use std::collections::BTreeSet;
use std::time::Instant;

use crate::audio::{Playback, SourceHandle, volume_scale};
use crate::catalog::{Category, Preset, TrackSpec, find_preset};
use crate::error::MixerError;

use super::timer::SleepTimer;

/// A catalog track plus its mutable playback state.
#[derive(Debug, Clone)]
pub struct Track {
    pub spec: TrackSpec,
    /// Intended play state; may disagree with audio when a start was rejected.
    pub playing: bool,
    /// Volume percentage, always within 0..=100.
    pub volume: u8,
}

impl Track {
    pub fn new(spec: TrackSpec) -> Self {
        Self {
            spec,
            playing: false,
            volume: spec.default_volume.min(100),
        }
    }

    pub fn id(&self) -> &'static str {
        self.spec.id
    }
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    pub presets: Vec<Preset>,
    pub tab: Category,
    /// Catalog index of the highlighted track.
    pub selected: usize,
    pub favorites: BTreeSet<&'static str>,
    pub mix_mode: bool,
    pub active_preset: Option<&'static str>,
    pub timer: SleepTimer,
    pub source_handle: Option<SourceHandle>,

    last_started: Option<usize>,
}

impl App {
    /// Create a new `App` over `tracks` and `presets`.
    pub fn new(tracks: &[TrackSpec], presets: &[Preset]) -> Self {
        let mut app = Self {
            tracks: tracks.iter().copied().map(Track::new).collect(),
            presets: presets.to_vec(),
            tab: Category::default(),
            selected: 0,
            favorites: BTreeSet::new(),
            mix_mode: false,
            active_preset: None,
            timer: SleepTimer::new(0, 15, 120),
            source_handle: None,
            last_started: None,
        };
        app.ensure_selected_visible();
        app
    }

    /// Attach the handle used to observe synthesis progress.
    pub fn set_source_handle(&mut self, h: SourceHandle) {
        self.source_handle = Some(h);
    }

    /// True once the audio thread has a playable source for `index`.
    pub fn source_ready(&self, index: usize) -> bool {
        self.source_handle
            .as_ref()
            .and_then(|h| h.lock().ok().map(|info| info.is_ready(index)))
            .unwrap_or(false)
    }

    pub fn index_of(&self, id: &str) -> Result<usize, MixerError> {
        self.tracks
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| MixerError::UnknownTrack(id.to_string()))
    }

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    pub fn any_playing(&self) -> bool {
        self.tracks.iter().any(|t| t.playing)
    }

    /// Catalog indices of playing tracks, in catalog order.
    pub fn playing_indices(&self) -> Vec<usize> {
        (0..self.tracks.len())
            .filter(|&i| self.tracks[i].playing)
            .collect()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Start `id`. With mix-mode off every other track is stopped first.
    pub fn start(&mut self, id: &str, playback: &impl Playback) -> Result<(), MixerError> {
        let idx = self.index_of(id)?;
        if self.tracks[idx].playing {
            return Ok(());
        }

        if !self.mix_mode {
            for (i, t) in self.tracks.iter_mut().enumerate() {
                if i != idx && t.playing {
                    playback.pause(i);
                    t.playing = false;
                }
            }
        }

        self.play_index(idx, playback);
        Ok(())
    }

    /// Stop `id`. Other tracks and the active preset are left alone.
    pub fn stop(&mut self, id: &str, playback: &impl Playback) -> Result<(), MixerError> {
        let idx = self.index_of(id)?;
        playback.pause(idx);
        self.tracks[idx].playing = false;
        Ok(())
    }

    /// Play/pause button: stop `id` if it plays, start it otherwise.
    pub fn toggle(&mut self, id: &str, playback: &impl Playback) -> Result<(), MixerError> {
        let idx = self.index_of(id)?;
        if self.tracks[idx].playing {
            self.stop(id, playback)
        } else {
            self.start(id, playback)
        }
    }

    /// Set the volume of `id`, clamped to 0..=100, and mirror it to playback.
    pub fn set_volume(
        &mut self,
        id: &str,
        volume: i32,
        playback: &impl Playback,
    ) -> Result<u8, MixerError> {
        let idx = self.index_of(id)?;
        let v = volume.clamp(0, 100) as u8;
        self.tracks[idx].volume = v;
        playback.set_volume(idx, volume_scale(v));
        Ok(v)
    }

    /// Shift the volume of `id` by `delta` percentage points.
    pub fn adjust_volume(
        &mut self,
        id: &str,
        delta: i32,
        playback: &impl Playback,
    ) -> Result<u8, MixerError> {
        let idx = self.index_of(id)?;
        let current = i32::from(self.tracks[idx].volume);
        self.set_volume(id, current + delta, playback)
    }

    /// Stop everything, enable mix-mode and start exactly the preset's tracks
    /// at the preset's volumes.
    pub fn apply_preset(&mut self, id: &str, playback: &impl Playback) -> Result<(), MixerError> {
        let preset = *find_preset(&self.presets, id)
            .ok_or_else(|| MixerError::UnknownPreset(id.to_string()))?;

        for (i, t) in self.tracks.iter().enumerate() {
            if t.playing {
                playback.pause(i);
            }
        }

        self.mix_mode = true;
        self.active_preset = Some(preset.id);

        for track_id in preset.tracks {
            if self.track(track_id).is_none() {
                tracing::warn!(preset = preset.id, track = *track_id, "preset names an unknown track");
            }
        }

        let mut last = None;
        for (i, t) in self.tracks.iter_mut().enumerate() {
            if preset.contains(t.id()) {
                t.volume = preset.volume_for(t.id()).unwrap_or(t.volume).min(100);
                t.playing = true;
                playback.play(i, volume_scale(t.volume));
                last = Some(i);
            } else {
                t.playing = false;
            }
        }
        self.last_started = last;

        tracing::info!(preset = preset.id, "preset applied");
        Ok(())
    }

    /// Apply the preset at position `n` of the preset list.
    pub fn apply_preset_at(&mut self, n: usize, playback: &impl Playback) -> Result<(), MixerError> {
        let id = self
            .presets
            .get(n)
            .map(|p| p.id)
            .ok_or_else(|| MixerError::UnknownPreset(format!("#{}", n + 1)))?;
        self.apply_preset(id, playback)
    }

    /// Stop every track and clear the active preset.
    pub fn stop_all(&mut self, playback: &impl Playback) {
        for (i, t) in self.tracks.iter_mut().enumerate() {
            if t.playing {
                playback.pause(i);
            }
            t.playing = false;
        }
        self.active_preset = None;
    }

    /// Switch mix-mode.
    ///
    /// Turning it off while several tracks play keeps only the most recently
    /// started one, so the single-track invariant holds again.
    pub fn set_mix_mode(&mut self, on: bool, playback: &impl Playback) {
        if !on {
            let playing = self.playing_indices();
            if playing.len() > 1 {
                let keep = self
                    .last_started
                    .filter(|i| playing.contains(i))
                    .unwrap_or(playing[0]);
                for i in playing.into_iter().filter(|&i| i != keep) {
                    playback.pause(i);
                    self.tracks[i].playing = false;
                }
                self.active_preset = None;
            }
        }
        self.mix_mode = on;
    }

    pub fn toggle_mix_mode(&mut self, playback: &impl Playback) {
        self.set_mix_mode(!self.mix_mode, playback);
    }

    /// Add `id` to favorites or remove it. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, MixerError> {
        let idx = self.index_of(id)?;
        let id = self.tracks[idx].id();
        if self.favorites.remove(id) {
            Ok(false)
        } else {
            self.favorites.insert(id);
            Ok(true)
        }
    }

    /// Arm the sleep timer with its current duration.
    pub fn start_timer(&mut self, now: Instant) -> Result<(), MixerError> {
        self.timer.start(now)?;
        tracing::info!(minutes = self.timer.minutes(), "sleep timer started");
        Ok(())
    }

    /// Fire the sleep timer if due. Returns true when everything was stopped.
    pub fn tick(&mut self, now: Instant, playback: &impl Playback) -> bool {
        if self.timer.poll(now) {
            tracing::info!("sleep timer elapsed, stopping all tracks");
            self.stop_all(playback);
            true
        } else {
            false
        }
    }

    fn play_index(&mut self, idx: usize, playback: &impl Playback) {
        let t = &mut self.tracks[idx];
        t.playing = true;
        playback.play(idx, volume_scale(t.volume));
        self.last_started = Some(idx);
    }

    /// Catalog indices of the tracks in the active tab.
    pub fn display_indices(&self) -> Vec<usize> {
        (0..self.tracks.len())
            .filter(|&i| self.tracks[i].spec.category == self.tab)
            .collect()
    }

    /// Catalog id of the highlighted track, if the tab has any.
    pub fn selected_id(&self) -> Option<&'static str> {
        self.display_indices()
            .contains(&self.selected)
            .then(|| self.tracks[self.selected].id())
    }

    /// Switch to `tab` and move the cursor onto its first track.
    pub fn set_tab(&mut self, tab: Category) {
        self.tab = tab;
        self.ensure_selected_visible();
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_tab(self.tab.prev());
    }

    /// Return the next visible index after `current`, wrapping around.
    pub fn next_in_view_from(&self, current: usize) -> Option<usize> {
        let display = self.display_indices();
        if display.is_empty() {
            return None;
        }

        let pos = display.iter().position(|&i| i == current);
        match pos {
            Some(p) => Some(display[(p + 1) % display.len()]),
            None => Some(display[0]),
        }
    }

    /// Return the previous visible index before `current`, wrapping around.
    pub fn prev_in_view_from(&self, current: usize) -> Option<usize> {
        let display = self.display_indices();
        if display.is_empty() {
            return None;
        }

        let pos = display.iter().position(|&i| i == current);
        match pos {
            Some(0) | None => Some(display[display.len() - 1]),
            Some(p) => Some(display[p - 1]),
        }
    }

    /// Move selection to the next visible track.
    pub fn next(&mut self) {
        if let Some(next) = self.next_in_view_from(self.selected) {
            self.selected = next;
        }
    }

    /// Move selection to the previous visible track.
    pub fn prev(&mut self) {
        if let Some(prev) = self.prev_in_view_from(self.selected) {
            self.selected = prev;
        }
    }

    /// Keep `selected` inside the active tab, falling back to its first track.
    fn ensure_selected_visible(&mut self) {
        let display = self.display_indices();
        if display.is_empty() {
            self.selected = 0;
            return;
        }

        if !display.contains(&self.selected) {
            self.selected = display[0];
        }
    }
}
