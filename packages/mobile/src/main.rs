use dioxus::prelude::*;
use ui::{use_auth, AuthProvider};
use views::{IncidentDetail, Incidents, Login, NewIncident, Shell};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/incidencias")]
        Incidents {},
        #[route("/incidencias/nueva")]
        NewIncident {},
        #[route("/incidencias/:id")]
        IncidentDetail { id: u64 },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::Flash::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Cold-start navigation gate: once the one-time session read settles, route
/// to the authenticated shell or the login screen. Logout is an explicit
/// transition elsewhere, never a re-evaluation of this check.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        if state.user.is_some() {
            nav.replace(Route::Incidents {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {}
}
