//! Setup-time errors. The running encounter has no recoverable errors.

use thiserror::Error;

/// An encounter parameter is out of its valid range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be a finite number >= 0, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} range is empty: min {min} > max {max}")]
    EmptyRange { name: &'static str, min: f32, max: f32 },

    #[error("{inner} ({inner_size}) must be smaller than {outer} ({outer_size})")]
    ZoneOrder {
        inner: &'static str,
        inner_size: f32,
        outer: &'static str,
        outer_size: f32,
    },

    #[error("cover stop threshold {stop} exceeds win threshold {win}")]
    CoverThresholds { stop: f32, win: f32 },

    #[error("screen bounds leave no room: min_x {min_x}, max_x {max_x}, margin {margin}")]
    ScreenBounds { min_x: f32, max_x: f32, margin: f32 },

    #[error("invalid config JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

/// The encounter could not be assembled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("required collaborator missing: {0}")]
    MissingCollaborator(&'static str),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// A scripted run could not be prepared.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("unknown script: {name}")]
    UnknownScript { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
