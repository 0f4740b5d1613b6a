#![forbid(unsafe_code)]

pub mod error;
pub mod pairing_service;
pub mod roster;
pub mod sound;

pub use binome_core::Clock;

pub use error::{RosterError, SoundError};
pub use pairing_service::PairingService;
pub use roster::load_roster;
pub use sound::ShuffleSound;
