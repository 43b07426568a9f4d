use std::{env, path::PathBuf};

use super::schema::Settings;

/// Longest placeholder loop the audio thread will synthesize per track.
pub const MAX_SYNTH_SECONDS: f32 = 600.0;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `LULL__`) override it, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("LULL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.timer.step_minutes == 0 {
            return Err("timer.step_minutes must be >= 1".to_string());
        }
        if self.timer.default_minutes > self.timer.max_minutes {
            return Err("timer.default_minutes must not exceed timer.max_minutes".to_string());
        }
        if self.controls.volume_step == 0 || self.controls.volume_step > 100 {
            return Err("controls.volume_step must be within 1..=100".to_string());
        }
        if !(self.audio.synth_seconds > 0.0 && self.audio.synth_seconds <= MAX_SYNTH_SECONDS) {
            return Err(format!("audio.synth_seconds must be within (0, {MAX_SYNTH_SECONDS}]"));
        }
        Ok(())
    }
}

/// Resolve the config path from `LULL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("LULL_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/lull/config.toml`
/// or `~/.config/lull/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("lull").join("config.toml"))
}

/// Compute the default log path under `$XDG_STATE_HOME/lull/lull.log`
/// or `~/.local/state/lull/lull.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("lull").join("lull.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
