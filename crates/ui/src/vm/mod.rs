mod pair_vm;

pub use pair_vm::{PairCardVm, ParticipantVm, map_candidates, map_pair, map_participant};
