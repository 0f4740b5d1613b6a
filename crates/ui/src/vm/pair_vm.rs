use std::fs;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use binome_core::model::{Pair, Participant};

/// One participant tile: display name plus an inlined portrait, or an
/// initial when the image cannot be read.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantVm {
    pub display_name: String,
    pub initial: String,
    pub image_src: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PairCardVm {
    pub left: ParticipantVm,
    pub right: ParticipantVm,
    pub drawn_at_label: Option<String>,
}

#[must_use]
pub fn map_participant(participant: &Participant) -> ParticipantVm {
    let initial = participant
        .display_name()
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |c| c.to_uppercase().to_string());

    // The webview cannot load arbitrary local paths, so portraits are
    // inlined as data URIs. An unreadable file falls back to the initial.
    let image_src = fs::read(participant.image_path()).ok().map(|bytes| {
        let mime = match participant
            .image_path()
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => "image/png",
            _ => "image/jpeg",
        };
        format!("data:{mime};base64,{}", STANDARD.encode(bytes))
    });

    ParticipantVm {
        display_name: participant.display_name().to_string(),
        initial,
        image_src,
    }
}

/// Maps a flicker-animation candidate pair (no draw timestamp).
#[must_use]
pub fn map_candidates(a: &Participant, b: &Participant) -> PairCardVm {
    PairCardVm {
        left: map_participant(a),
        right: map_participant(b),
        drawn_at_label: None,
    }
}

/// Maps a drawn pair, including the time of the draw.
#[must_use]
pub fn map_pair(pair: &Pair) -> PairCardVm {
    PairCardVm {
        left: map_participant(pair.first()),
        right: map_participant(pair.second()),
        drawn_at_label: Some(pair.drawn_at().format("%H:%M").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binome_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unreadable_image_falls_back_to_initial() {
        let participant = Participant::from_image_path("missing/marie_curie.png").unwrap();
        let vm = map_participant(&participant);
        assert_eq!(vm.display_name, "marie curie");
        assert_eq!(vm.initial, "M");
        assert!(vm.image_src.is_none());
    }

    #[test]
    fn readable_image_becomes_a_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Ada.png");
        std::fs::write(&path, b"fake png bytes").unwrap();

        let participant = Participant::from_image_path(&path).unwrap();
        let vm = map_participant(&participant);
        let src = vm.image_src.expect("image should be inlined");
        assert!(src.starts_with("data:image/png;base64,"), "got {src}");
    }

    #[test]
    fn drawn_pair_carries_a_time_label() {
        let roster: Vec<_> = ["a.png", "b.png"]
            .iter()
            .map(|name| Participant::from_image_path(format!("images/{name}")).unwrap())
            .collect();
        let mut session = binome_core::model::PairingSession::new(roster);
        let mut rng = StdRng::seed_from_u64(7);
        let pair = session.draw_pair(&mut rng, fixed_now()).unwrap();

        let vm = map_pair(&pair);
        assert_eq!(vm.drawn_at_label.as_deref(), Some("22:13"));
        assert_ne!(vm.left.display_name, vm.right.display_name);
    }
}
