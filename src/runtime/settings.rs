use crate::config;

/// Turn a config load result into usable settings, falling back to defaults.
pub fn resolve_settings(loaded: Result<config::Settings, ::config::ConfigError>) -> config::Settings {
    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                tracing::warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            tracing::warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
