use dioxus::prelude::*;
use ui::AppShell;

use crate::Route;

/// Layout wrapper around the authenticated routes.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        AppShell {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
