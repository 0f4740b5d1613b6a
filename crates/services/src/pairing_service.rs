use binome_core::Clock;
use binome_core::model::{Exhausted, Pair, PairingSession, Participant};

/// Applies pairing transitions to a caller-owned `PairingSession`.
///
/// The service itself holds no session state; the UI keeps the session
/// value and hands it in per action, so each click is one explicit
/// transition.
#[derive(Debug, Clone)]
pub struct PairingService {
    roster: Vec<Participant>,
    clock: Clock,
}

impl PairingService {
    #[must_use]
    pub fn new(roster: Vec<Participant>, clock: Clock) -> Self {
        Self { roster, clock }
    }

    #[must_use]
    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    /// Starts a fresh session over the full roster.
    #[must_use]
    pub fn start_session(&self) -> PairingSession {
        PairingSession::new(self.roster.clone())
    }

    /// Draws the next pair.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` when fewer than two participants remain.
    pub fn draw(&self, session: &mut PairingSession) -> Result<Pair, Exhausted> {
        let mut rng = rand::rng();
        session.draw_pair(&mut rng, self.clock.now())
    }

    /// Samples a candidate pair for the reveal animation without mutating
    /// the session.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` when fewer than two participants remain.
    pub fn peek(&self, session: &PairingSession) -> Result<(Participant, Participant), Exhausted> {
        let mut rng = rand::rng();
        session.peek_pair(&mut rng)
    }

    /// Restores the session to its initial state.
    pub fn reset(&self, session: &mut PairingSession) {
        session.reset();
    }
}
