//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading the participant roster.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RosterError {
    #[error("image folder not found: {}", .path.display())]
    MissingFolder { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted while loading the shuffle sound.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SoundError {
    #[error("sound file not found: {}", .path.display())]
    Missing { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
