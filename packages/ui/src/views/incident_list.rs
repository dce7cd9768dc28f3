use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::{use_auth, Icon};

/// Scoped incident list.
///
/// The fetch is keyed by the current user id and profile and re-runs on every
/// mount, replacing the prior list wholesale. The refresh action re-issues
/// the same fetch. Selecting a row hands only the incident id to the caller.
#[component]
pub fn IncidentListView(on_select: EventHandler<u64>, on_new: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| Option::<String>::None);

    let mut incidencias = use_resource(move || async move {
        let Some(user) = auth().user else {
            return Vec::new();
        };
        match api::Client::new().list_incidencias(user.id, user.id_perfil).await {
            Ok(resp) if resp.success => {
                error.set(None);
                resp.data.unwrap_or_default()
            }
            Ok(resp) => {
                error.set(Some(
                    resp.message_or("No se pudieron cargar las incidencias").to_string(),
                ));
                Vec::new()
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                Vec::new()
            }
        }
    });

    rsx! {
        div {
            class: "incident-list-screen",
            h1 { class: "screen-title", "Mis Incidencias" }
            if let Some(msg) = error() {
                div { class: "alert alert-error", "{msg}" }
            }
            match incidencias() {
                None => rsx! {
                    div { class: "loading", "Cargando..." }
                },
                Some(rows) => rsx! {
                    button {
                        class: "button-refresh",
                        onclick: move |_| incidencias.restart(),
                        "Actualizar"
                    }
                    div {
                        class: "incident-list",
                        for item in rows {
                            button {
                                key: "{item.id}",
                                class: "incident-card",
                                onclick: move |_| on_select.call(item.id),
                                if let Some(url) = &item.base_url {
                                    img { class: "incident-thumb", src: "{url}" }
                                }
                                div {
                                    class: "incident-info",
                                    span { class: "incident-title", "{item.titulo}" }
                                    span { class: "incident-meta", "Codigo: {item.codigo}" }
                                    span { class: "incident-meta", "Fecha: {item.created_at}" }
                                    span {
                                        class: "incident-status",
                                        color: "{item.estado.color}",
                                        "{item.estado.nombre}"
                                    }
                                }
                            }
                        }
                    }
                },
            }
            if auth().caps.create_incidents {
                button {
                    class: "floating-button",
                    onclick: move |_| on_new.call(()),
                    Icon { icon: FaPlus }
                }
            }
        }
    }
}
