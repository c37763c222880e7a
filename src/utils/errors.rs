use std::io;
use thiserror::Error;

use crate::components::aircraft::config::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Aircraft config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Unrestricted mode is not allowed by the physics config")]
    UnrestrictedModeDisabled,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
