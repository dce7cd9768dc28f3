use dioxus::prelude::*;
use ui::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_login: move |_| {
                nav.replace(Route::Incidents {});
            },
        }
    }
}
