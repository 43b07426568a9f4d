use std::sync::mpsc::Receiver;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use crate::catalog::TrackSpec;
use crate::config::AudioSettings;
use crate::synth::synthesize;

use super::sink::create_looping_sink;
use super::types::{AudioCmd, SourceHandle};

pub(super) fn spawn_audio_thread(
    tracks: Vec<TrackSpec>,
    rx: Receiver<AudioCmd>,
    sources: SourceHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("no audio output device: {e}");
                if let Ok(mut info) = sources.lock() {
                    info.device_error = Some(e.to_string());
                }
                // Keep draining so the UI never blocks on a dead channel.
                drain_without_device(rx);
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let sample_rate = stream.config().sample_rate();
        tracing::info!(sample_rate, "audio output opened");
        if let Ok(mut info) = sources.lock() {
            info.sample_rate = Some(sample_rate);
        }

        let mut sinks: Vec<Option<Sink>> = Vec::with_capacity(tracks.len());
        for (i, track) in tracks.iter().enumerate() {
            let sink = synthesize(track, sample_rate, audio_settings.synth_seconds)
                .map_err(|e| e.to_string())
                .and_then(|wav| create_looping_sink(&stream, wav).map_err(|e| e.to_string()));
            match sink {
                Ok(s) => {
                    sinks.push(Some(s));
                    if let Ok(mut info) = sources.lock() {
                        info.ready[i] = true;
                    }
                }
                Err(e) => {
                    tracing::warn!(track = track.id, "failed to prepare source: {e}");
                    sinks.push(None);
                }
            }
        }
        tracing::debug!(count = sinks.iter().flatten().count(), "sources ready");

        while let Ok(cmd) = rx.recv() {
            match cmd {
                AudioCmd::Play { index, volume } => match sinks.get(index) {
                    Some(Some(s)) => {
                        s.set_volume(volume);
                        s.play();
                    }
                    _ => {
                        tracing::warn!(index, "play request rejected: no playable source");
                    }
                },
                AudioCmd::Pause(index) => {
                    if let Some(Some(s)) = sinks.get(index) {
                        s.pause();
                    }
                }
                AudioCmd::SetVolume { index, volume } => {
                    if let Some(Some(s)) = sinks.get(index) {
                        s.set_volume(volume);
                    }
                }
                AudioCmd::Quit { fade_out_ms } => {
                    let playing: Vec<&Sink> = sinks
                        .iter()
                        .flatten()
                        .filter(|s| !s.is_paused())
                        .collect();
                    fade_out_sinks(&playing, fade_out_ms);
                    for s in sinks.iter().flatten() {
                        s.stop();
                    }
                    break;
                }
            }
        }
    })
}

fn drain_without_device(rx: Receiver<AudioCmd>) {
    while let Ok(cmd) = rx.recv() {
        match cmd {
            AudioCmd::Play { index, .. } => {
                tracing::warn!(index, "play request rejected: no audio device");
            }
            AudioCmd::Quit { .. } => break,
            _ => {}
        }
    }
}

/// Ramp every sink in `sinks` from its current volume down to silence.
fn fade_out_sinks(sinks: &[&Sink], fade_out_ms: u64) {
    if sinks.is_empty() {
        return;
    }
    if fade_out_ms == 0 {
        for s in sinks {
            s.set_volume(0.0);
        }
        return;
    }
    let start: Vec<f32> = sinks.iter().map(|s| s.volume()).collect();
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        for (s, v0) in sinks.iter().zip(&start) {
            s.set_volume(v0 * (1.0 - t));
        }
        thread::sleep(Duration::from_millis(step_ms));
    }
}
