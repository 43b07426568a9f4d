use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::catalog::TrackSpec;
use crate::config::AudioSettings;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, Playback, SourceHandle, SourceInfo};

pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    sources: SourceHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(tracks: Vec<TrackSpec>, audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let sources: SourceHandle = Arc::new(Mutex::new(SourceInfo::new(tracks.len())));

        let audio_handle = spawn_audio_thread(tracks, rx, sources.clone(), audio_settings);

        Self {
            tx,
            sources,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn source_handle(&self) -> SourceHandle {
        self.sources.clone()
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }

    fn send_or_log(&self, cmd: AudioCmd) {
        if let Err(e) = self.send(cmd) {
            tracing::warn!("audio thread is gone, dropping {:?}", e.0);
        }
    }
}

impl Playback for AudioPlayer {
    fn play(&self, index: usize, volume: f32) {
        self.send_or_log(AudioCmd::Play { index, volume });
    }

    fn pause(&self, index: usize) {
        self.send_or_log(AudioCmd::Pause(index));
    }

    fn set_volume(&self, index: usize, volume: f32) {
        self.send_or_log(AudioCmd::SetVolume { index, volume });
    }
}
