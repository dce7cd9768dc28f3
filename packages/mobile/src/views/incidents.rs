use dioxus::prelude::*;
use ui::IncidentListView;

use crate::Route;

#[component]
pub fn Incidents() -> Element {
    let nav = use_navigator();

    rsx! {
        IncidentListView {
            on_select: move |id| {
                nav.push(Route::IncidentDetail { id });
            },
            on_new: move |_| {
                nav.push(Route::NewIncident {});
            },
        }
    }
}
