use dioxus::prelude::*;
use ui::NewIncidentView;

#[component]
pub fn NewIncident() -> Element {
    let nav = use_navigator();

    rsx! {
        NewIncidentView {
            on_done: move |_| {
                nav.go_back();
            },
        }
    }
}
