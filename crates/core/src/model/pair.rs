use chrono::{DateTime, Utc};

use crate::model::Participant;

/// Two participants drawn together.
///
/// `first`/`second` reflect draw order and are only used for layout; the
/// pair itself is unordered, which is what `contains` expresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    first: Participant,
    second: Participant,
    drawn_at: DateTime<Utc>,
}

impl Pair {
    pub(crate) fn new(first: Participant, second: Participant, drawn_at: DateTime<Utc>) -> Self {
        Self {
            first,
            second,
            drawn_at,
        }
    }

    #[must_use]
    pub fn first(&self) -> &Participant {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &Participant {
        &self.second
    }

    #[must_use]
    pub fn members(&self) -> [&Participant; 2] {
        [&self.first, &self.second]
    }

    #[must_use]
    pub fn contains(&self, participant: &Participant) -> bool {
        self.first == *participant || self.second == *participant
    }

    #[must_use]
    pub fn drawn_at(&self) -> DateTime<Utc> {
        self.drawn_at
    }
}
