use std::time::Duration;

use dioxus::prelude::*;

use binome_core::model::{PairingSession, Participant};

use crate::context::AppContext;
use crate::views::PairCard;
use crate::vm::{PairCardVm, map_candidates, map_pair};

// Flicker constants from the original reveal animation.
const ANIMATION_LOOPS: usize = 18;
const ANIMATION_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq)]
enum Stage {
    Idle,
    Spinning(PairCardVm),
    Revealed(PairCardVm),
}

#[component]
pub fn DrawView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<PairingSession>>();
    let mut spinning = use_signal(|| false);
    let mut preview = use_signal(|| None::<(Participant, Participant)>);
    let mut exhausted_notice = use_signal(|| false);
    let mut sound_nonce = use_signal(|| 0_u32);

    let sound_uri = ctx
        .shuffle_sound()
        .map(|sound| sound.data_uri().to_string());
    let has_sound = sound_uri.is_some();

    let on_draw = {
        let pairing = ctx.pairing();
        use_callback(move |()| {
            if spinning() {
                return;
            }
            if session.read().is_exhausted() {
                exhausted_notice.set(true);
                return;
            }
            let pairing = pairing.clone();
            let mut session = session;
            spawn(async move {
                spinning.set(true);
                if has_sound {
                    sound_nonce.set(sound_nonce() + 1);
                }

                // Cosmetic flicker: candidates are sampled without touching
                // the session. Only the final draw below decides the pair.
                for _ in 0..ANIMATION_LOOPS {
                    let candidate = {
                        let guard = session.read();
                        pairing.peek(&guard)
                    };
                    match candidate {
                        Ok(candidate) => preview.set(Some(candidate)),
                        Err(_) => break,
                    }
                    tokio::time::sleep(ANIMATION_DELAY).await;
                }
                preview.set(None);

                let outcome = {
                    let mut guard = session.write();
                    pairing.draw(&mut guard)
                };
                spinning.set(false);
                if outcome.is_err() {
                    exhausted_notice.set(true);
                }
            });
        })
    };

    let on_reset = {
        let pairing = ctx.pairing();
        use_callback(move |()| {
            let mut session = session;
            {
                let mut guard = session.write();
                pairing.reset(&mut guard);
            }
            preview.set(None);
            exhausted_notice.set(false);
        })
    };

    let (pool_len, pairs_formed, roster_is_empty, current) = {
        let guard = session.read();
        (
            guard.pool_len(),
            guard.history().len(),
            guard.roster_len() == 0,
            guard.current_pair().map(map_pair),
        )
    };
    let stage = match (preview().map(|(a, b)| map_candidates(&a, &b)), current) {
        (Some(card), _) => Stage::Spinning(card),
        (None, Some(card)) => Stage::Revealed(card),
        (None, None) => Stage::Idle,
    };

    rsx! {
        div { class: "page draw-page",
            header { class: "view-header",
                h2 { class: "view-title", "🎯 Logiciel de Binômage" }
                p { class: "view-subtitle", "Tirage au sort des binômes." }
            }
            div { class: "view-divider" }
            div { class: "draw-actions",
                button {
                    class: "btn btn-primary",
                    id: "draw-start",
                    r#type: "button",
                    disabled: spinning(),
                    onclick: move |_| on_draw.call(()),
                    "▶️ START"
                }
                button {
                    class: "btn btn-secondary",
                    id: "draw-reset",
                    r#type: "button",
                    disabled: spinning(),
                    onclick: move |_| on_reset.call(()),
                    "🔄 RESET"
                }
            }
            match stage {
                Stage::Spinning(card) => rsx! {
                    section { class: "draw-stage draw-stage--spinning",
                        PairCard { card }
                    }
                },
                Stage::Revealed(card) => rsx! {
                    section { class: "draw-stage",
                        h3 { class: "draw-stage-title", "✅ Binôme sélectionné" }
                        PairCard { card }
                    }
                },
                Stage::Idle => rsx! {
                    section { class: "draw-stage draw-stage--placeholder",
                        h3 { class: "draw-stage-title", "🎞️ Zone de tirage" }
                        div { class: "pair-card",
                            div { class: "participant-tile participant-tile--placeholder",
                                span { class: "participant-initial", "?" }
                            }
                            div { class: "participant-tile participant-tile--placeholder",
                                span { class: "participant-initial", "?" }
                            }
                        }
                    }
                },
            }
            footer { class: "draw-footer",
                span { class: "draw-footer-item", "Restants: {pool_len}" }
                span { class: "draw-footer-item", "Binômes formés: {pairs_formed}" }
            }
            if exhausted_notice() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| exhausted_notice.set(false),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "ℹ️ Information" }
                        if roster_is_empty {
                            p { class: "modal-body", "Aucune image de participant n'a été trouvée." }
                        } else {
                            p { class: "modal-body", "Tous les binômes ont été formés ✅" }
                            p { class: "modal-body", "Cliquez sur RESET pour recommencer." }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| exhausted_notice.set(false),
                                "Fermer"
                            }
                        }
                    }
                }
            }
            if let Some(src) = sound_uri {
                if sound_nonce() > 0 {
                    // Remounted per draw so the webview replays it.
                    audio { key: "{sound_nonce()}", autoplay: true, src: "{src}" }
                }
            }
        }
    }
}
