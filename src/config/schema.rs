use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lull/config.toml` or `~/.config/lull/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LULL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub mixer: MixerSettings,
    pub timer: TimerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Length of each synthesized loop (seconds).
    pub synth_seconds: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            synth_seconds: 3.0,
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Category tab shown at startup.
    pub start_tab: TabSetting,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Soothing sounds for deep rest ~ ".to_string(),
            start_tab: TabSetting::Nature,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TabSetting {
    Nature,
    #[serde(alias = "frequency", alias = "tones")]
    Frequencies,
    #[serde(alias = "story")]
    Stories,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Volume change (percent) when pressing `-` / `+`.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { volume_step: 5 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MixerSettings {
    /// Whether mix-mode starts enabled.
    pub mix_mode: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Increment used by `[` / `]` (minutes).
    pub step_minutes: u32,
    /// Upper bound for the sleep timer (minutes).
    pub max_minutes: u32,
    /// Initial timer duration (minutes). 0 leaves the timer unset.
    pub default_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            step_minutes: 15,
            max_minutes: 120,
            default_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `LULL_LOG` is not set.
    pub level: String,
    /// Log file path. Defaults to `$XDG_STATE_HOME/lull/lull.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
