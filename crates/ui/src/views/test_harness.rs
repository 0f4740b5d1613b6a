use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use binome_core::model::PairingSession;
use services::{PairingService, ShuffleSound};

use crate::context::{UiApp, build_app_context};
use crate::views::{DrawView, HistoryView};

#[derive(Clone)]
struct TestApp {
    pairing: Arc<PairingService>,
}

impl UiApp for TestApp {
    fn pairing(&self) -> Arc<PairingService> {
        Arc::clone(&self.pairing)
    }

    fn shuffle_sound(&self) -> Option<Arc<ShuffleSound>> {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Draw,
    History,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: PairingSession,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    // The harness provides the session directly instead of going through
    // the real layout, so tests can pre-draw state.
    use_context_provider(|| Signal::new(props.session.clone()));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Draw => rsx! { DrawView {} },
        ViewKind::History => rsx! { HistoryView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    service: PairingService,
    session: PairingSession,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        pairing: Arc::new(service),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, session });
    ViewHarness { dom }
}
