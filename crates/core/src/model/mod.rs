mod pair;
mod participant;
mod session;

pub use pair::Pair;
pub use participant::{Participant, ParticipantError, SUPPORTED_EXTENSIONS};
pub use session::{Exhausted, PairingSession};
