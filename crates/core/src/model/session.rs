use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::index::sample;
use thiserror::Error;

use crate::model::{Pair, Participant};

/// Fewer than two participants remain in the pool.
///
/// This is a user-facing condition rather than a failure: the session stays
/// usable and `reset` makes drawing possible again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("fewer than two participants remain in the pool")]
pub struct Exhausted;

/// Session-scoped pairing state: who is still unpaired, which pairs have
/// been formed, and the most recently drawn pair.
///
/// Draws are uniform without replacement. The pool shrinks by exactly two
/// per successful draw and a participant appears in at most one pair until
/// the session is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingSession {
    roster: Vec<Participant>,
    pool: Vec<Participant>,
    history: Vec<Pair>,
    current: Option<Pair>,
}

impl PairingSession {
    /// Starts a session with the full roster in the pool.
    #[must_use]
    pub fn new(roster: Vec<Participant>) -> Self {
        Self {
            pool: roster.clone(),
            roster,
            history: Vec::new(),
            current: None,
        }
    }

    /// Draws two distinct participants uniformly at random, removes them
    /// from the pool, records the pair in history and makes it current.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted`, without touching any state, when fewer than two
    /// participants remain.
    pub fn draw_pair<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Pair, Exhausted> {
        if self.pool.len() < 2 {
            return Err(Exhausted);
        }

        let picked = sample(rng, self.pool.len(), 2);
        let (i, j) = (picked.index(0), picked.index(1));
        // Remove the higher index first so the lower one stays valid.
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        let second = self.pool.swap_remove(hi);
        let first = self.pool.swap_remove(lo);
        let (first, second) = if i < j { (first, second) } else { (second, first) };

        let pair = Pair::new(first, second, now);
        self.history.push(pair.clone());
        self.current = Some(pair.clone());
        Ok(pair)
    }

    /// Samples two distinct participants without removing them.
    ///
    /// Presentation-only: this feeds the reveal animation and never affects
    /// which pair is actually drawn.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` when fewer than two participants remain.
    pub fn peek_pair<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Participant, Participant), Exhausted> {
        if self.pool.len() < 2 {
            return Err(Exhausted);
        }
        let picked = sample(rng, self.pool.len(), 2);
        Ok((
            self.pool[picked.index(0)].clone(),
            self.pool[picked.index(1)].clone(),
        ))
    }

    /// Restores the initial state: full pool, empty history, no current
    /// pair. Idempotent.
    pub fn reset(&mut self) {
        self.pool = self.roster.clone();
        self.history.clear();
        self.current = None;
    }

    #[must_use]
    pub fn pool(&self) -> &[Participant] {
        &self.pool
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Pair] {
        &self.history
    }

    #[must_use]
    pub fn current_pair(&self) -> Option<&Pair> {
        self.current.as_ref()
    }

    /// True when no further draw can succeed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pool.len() < 2
    }
}
