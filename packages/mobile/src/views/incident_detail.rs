use dioxus::prelude::*;
use ui::IncidentDetailView;

#[component]
pub fn IncidentDetail(id: u64) -> Element {
    rsx! {
        IncidentDetailView { id }
    }
}
