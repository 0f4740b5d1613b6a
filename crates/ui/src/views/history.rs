use dioxus::prelude::*;

use binome_core::model::PairingSession;

use crate::views::PairCard;
use crate::vm::{PairCardVm, map_pair};

#[component]
pub fn HistoryView() -> Element {
    let session = use_context::<Signal<PairingSession>>();

    let (cards, remaining, roster_len) = {
        let guard = session.read();
        let cards: Vec<PairCardVm> = guard.history().iter().map(map_pair).collect();
        let remaining: Vec<String> = guard
            .pool()
            .iter()
            .map(|p| p.display_name().to_string())
            .collect();
        (cards, remaining, guard.roster_len())
    };
    let subtitle = format!(
        "{} binômes · {} participants restants sur {roster_len}",
        cards.len(),
        remaining.len(),
    );

    rsx! {
        div { class: "page history-page",
            header { class: "view-header",
                h2 { class: "view-title", "📌 Binômes déjà formés" }
                p { class: "view-subtitle", "{subtitle}" }
            }
            div { class: "view-divider" }
            if cards.is_empty() {
                p { class: "history-empty", "Aucun binôme formé pour le moment." }
            } else {
                div { class: "history-list",
                    for (index, card) in cards.into_iter().enumerate() {
                        HistoryRow { index, card }
                    }
                }
            }
            if !remaining.is_empty() {
                section { class: "history-remaining",
                    h3 { class: "history-remaining-title", "En attente d'un binôme" }
                    ul { class: "history-remaining-list",
                        for name in remaining {
                            li { "{name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(index: usize, card: PairCardVm) -> Element {
    let time_label = card.drawn_at_label.clone();
    rsx! {
        div { class: "history-row",
            span { class: "history-index", "#{index + 1}" }
            PairCard { card }
            if let Some(label) = time_label {
                span { class: "history-time", "{label}" }
            }
        }
    }
}
