//! Errors returned by mixer controller operations.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MixerError {
    #[error("unknown track `{0}`")]
    UnknownTrack(String),
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("sleep timer is already running")]
    TimerActive,
    #[error("sleep timer duration is zero")]
    TimerUnset,
}
