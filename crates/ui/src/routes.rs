use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{DrawView, HistoryView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DrawView)] Draw {},
        #[route("/history", HistoryView)] History {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    // The session value lives here so both views read the same state and
    // each user action applies exactly one transition plus one re-render.
    use_context_provider(|| Signal::new(ctx.pairing().start_session()));

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Binômage" }
            ul {
                li { Link { to: Route::Draw {}, "Tirage" } }
                li { Link { to: Route::History {}, "Historique" } }
            }
        }
    }
}
