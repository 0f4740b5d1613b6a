use dioxus::prelude::*;

use crate::vm::{PairCardVm, ParticipantVm};

#[component]
pub fn PairCard(card: PairCardVm) -> Element {
    rsx! {
        div { class: "pair-card",
            ParticipantTile { participant: card.left }
            ParticipantTile { participant: card.right }
        }
    }
}

#[component]
fn ParticipantTile(participant: ParticipantVm) -> Element {
    rsx! {
        div { class: "participant-tile",
            if let Some(src) = participant.image_src {
                img {
                    class: "participant-photo",
                    src: "{src}",
                    alt: "{participant.display_name}",
                }
            } else {
                span { class: "participant-initial", "{participant.initial}" }
            }
            h3 { class: "participant-name", "{participant.display_name}" }
        }
    }
}
