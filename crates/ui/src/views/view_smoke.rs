use binome_core::model::Participant;
use binome_core::time::{fixed_clock, fixed_now};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::PairingService;

use super::test_harness::{ViewKind, setup_view_harness};

fn roster(names: &[&str]) -> Vec<Participant> {
    names
        .iter()
        .map(|name| Participant::from_image_path(format!("images/{name}.png")).unwrap())
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn draw_view_smoke_renders_controls_and_placeholder() {
    let service = PairingService::new(roster(&["Ada", "Alan", "Grace", "Marie"]), fixed_clock());
    let session = service.start_session();
    let mut harness = setup_view_harness(ViewKind::Draw, service, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("START"), "missing start button in {html}");
    assert!(html.contains("RESET"), "missing reset button in {html}");
    assert!(html.contains("Zone de tirage"), "missing placeholder in {html}");
    assert!(html.contains("Restants: 4"), "missing pool count in {html}");
    assert!(html.contains("Binômes formés: 0"), "missing pair count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn draw_view_smoke_renders_current_pair() {
    let service = PairingService::new(roster(&["Ada", "Alan", "Grace", "Marie"]), fixed_clock());
    let mut session = service.start_session();
    let mut rng = StdRng::seed_from_u64(7);
    let pair = session.draw_pair(&mut rng, fixed_now()).unwrap();

    let mut harness = setup_view_harness(ViewKind::Draw, service, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Binôme sélectionné"), "missing reveal in {html}");
    for member in pair.members() {
        assert!(
            html.contains(member.display_name()),
            "missing {} in {html}",
            member.display_name()
        );
    }
    assert!(html.contains("Restants: 2"), "missing pool count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_lists_pairs_and_remaining() {
    let service = PairingService::new(
        roster(&["Ada", "Alan", "Grace", "Marie", "Niels"]),
        fixed_clock(),
    );
    let mut session = service.start_session();
    let mut rng = StdRng::seed_from_u64(7);
    session.draw_pair(&mut rng, fixed_now()).unwrap();
    session.draw_pair(&mut rng, fixed_now()).unwrap();
    let paired: Vec<String> = session
        .history()
        .iter()
        .flat_map(|pair| pair.members())
        .map(|p| p.display_name().to_string())
        .collect();
    let remaining = session.pool()[0].display_name().to_string();

    let mut harness = setup_view_harness(ViewKind::History, service, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Binômes déjà formés"), "missing title in {html}");
    for name in &paired {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(
        html.contains("En attente d'un binôme"),
        "missing remaining section in {html}"
    );
    assert!(html.contains(&remaining), "missing {remaining} in {html}");
    // fixed_now renders as 22:13 UTC.
    assert!(html.contains("22:13"), "missing draw time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_state() {
    let service = PairingService::new(roster(&["Ada", "Alan"]), fixed_clock());
    let session = service.start_session();
    let mut harness = setup_view_harness(ViewKind::History, service, session);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Aucun binôme formé pour le moment."),
        "missing empty state in {html}"
    );
}
