use dioxus::prelude::*;

use api::{FileAttachment, FollowUpDraft};

use crate::icons::FaPlus;
use crate::{open_attachment, use_auth, Icon};

/// Incident detail with follow-up history.
///
/// Three independent fetches run on mount — detail, history, allowed
/// statuses — each feeding its own piece of view state, with no ordering
/// between them. They are owned by the component, so navigating away drops
/// them before a stale result can be applied.
///
/// A successful follow-up submission re-fetches all three and closes the
/// form; a failed one leaves the form open with the entered text intact.
#[component]
pub fn IncidentDetailView(id: u64) -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut detalle = use_resource(move || async move {
        match api::Client::new().incidencia(id).await {
            Ok(resp) if resp.success => resp.data,
            Ok(resp) => {
                error.set(Some(resp.message.clone()));
                None
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                None
            }
        }
    });

    let mut seguimientos = use_resource(move || async move {
        match api::Client::new().seguimientos(id).await {
            Ok(resp) if resp.success => resp.data.unwrap_or_default(),
            Ok(resp) => {
                tracing::warn!("follow-up history fetch rejected: {}", resp.message);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("follow-up history fetch failed: {e}");
                Vec::new()
            }
        }
    });

    let mut estados = use_resource(move || async move {
        match api::Client::new().estados(id).await {
            Ok(resp) if resp.success => resp.data.unwrap_or_default(),
            Ok(resp) => {
                tracing::warn!("status list fetch rejected: {}", resp.message);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("status list fetch failed: {e}");
                Vec::new()
            }
        }
    });

    // Follow-up form state, kept across failed attempts
    let mut modal_open = use_signal(|| false);
    let mut estado_id = use_signal(|| Option::<u64>::None);
    let mut descripcion = use_signal(String::new);
    let mut archivo = use_signal(|| Option::<FileAttachment>::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |_| async move {
        let draft = FollowUpDraft {
            estado_id: estado_id(),
            descripcion: descripcion(),
            archivo: archivo(),
        };
        if let Err(msg) = draft.validate() {
            form_error.set(Some(msg.to_string()));
            return;
        }
        let Some(user) = auth().user else {
            return;
        };

        saving.set(true);
        let result = api::Client::new().crear_seguimiento(user.id, id, &draft).await;
        match result {
            Ok(resp) if resp.success => {
                estado_id.set(None);
                descripcion.set(String::new());
                archivo.set(None);
                form_error.set(None);
                modal_open.set(false);
                notice.set(Some(resp.message));
                detalle.restart();
                seguimientos.restart();
                estados.restart();
            }
            Ok(resp) => {
                form_error.set(Some(
                    resp.message_or("No se pudo guardar el seguimiento.").to_string(),
                ));
            }
            Err(_) => {
                form_error.set(Some("No se pudo guardar el seguimiento.".to_string()));
            }
        }
        saving.set(false);
    };

    let handle_file = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(path) = file_engine.files().first().cloned() {
                if let Some(bytes) = file_engine.read_file(&path).await {
                    let name = path.rsplit('/').next().unwrap_or(&path).to_string();
                    let mime = FileAttachment::mime_for(&name);
                    archivo.set(Some(FileAttachment { name, mime, bytes }));
                }
            }
        }
    };

    rsx! {
        div {
            class: "incident-detail-screen",
            if let Some(msg) = error() {
                div { class: "alert alert-error", "{msg}" }
            }
            if let Some(msg) = notice() {
                div { class: "alert alert-success", "{msg}" }
            }
            match detalle() {
                None => rsx! {
                    div { class: "loading", "Cargando..." }
                },
                Some(None) => rsx! {
                    p { class: "empty", "No se encontraron detalles para esta incidencia." }
                },
                Some(Some(inc)) => rsx! {
                    h1 { class: "screen-title", "#{inc.codigo}" }
                    if let Some(url) = &inc.base_url {
                        img { class: "detail-image", src: "{url}" }
                    }
                    div {
                        class: "detail-card",
                        h2 { class: "detail-title", "{inc.titulo}" }
                        p { class: "detail-description", "{inc.descripcion}" }
                        div { class: "info-row", span { class: "label", "Alumno:" } span { "{inc.alumno}" } }
                        div { class: "info-row", span { class: "label", "Nivel:" } span { "{inc.nivel}" } }
                        div { class: "info-row", span { class: "label", "Creador de Incidencia:" } span { "{inc.creador}" } }
                        div { class: "info-row", span { class: "label", "Fecha de registro:" } span { "{inc.fecha}" } }
                        div {
                            class: "info-row",
                            span { class: "label", "Estado:" }
                            span { class: "incident-status", color: "{inc.estado.color}", "{inc.estado.nombre}" }
                        }
                    }
                    div {
                        class: "detail-card",
                        h2 { class: "detail-title", "Historial de Seguimientos" }
                        for item in seguimientos().unwrap_or_default() {
                            div {
                                key: "{item.id}",
                                class: "history-item",
                                span { class: "history-user", "{item.usuario}" }
                                div {
                                    class: "info-row",
                                    span { class: "history-date", "{item.fecha}" }
                                    span { class: "incident-status", color: "{item.estado.color}", "{item.estado.nombre}" }
                                }
                                p {
                                    class: "history-description",
                                    {item.descripcion.clone().unwrap_or_else(|| "Sin descripción.. ".to_string())}
                                }
                                if let Some(url) = item.base_url.clone() {
                                    button {
                                        class: "button-file",
                                        onclick: move |_| open_attachment(&url),
                                        "Abrir Archivo"
                                    }
                                }
                            }
                        }
                    }
                },
            }
            if auth().caps.author_follow_ups {
                button {
                    class: "floating-button",
                    onclick: move |_| modal_open.set(true),
                    Icon { icon: FaPlus }
                }
            }
            if modal_open() {
                div {
                    class: "modal-overlay",
                    div {
                        class: "modal-content",
                        h2 { class: "modal-title", "Nuevo Seguimiento" }
                        if let Some(msg) = form_error() {
                            div { class: "alert alert-error", "{msg}" }
                        }
                        select {
                            class: "field",
                            value: estado_id().map(|v| v.to_string()).unwrap_or_default(),
                            onchange: move |evt| estado_id.set(evt.value().parse().ok()),
                            option { value: "", disabled: true, selected: estado_id().is_none(), "Seleccione un estado" }
                            for estado in estados().unwrap_or_default() {
                                option { key: "{estado.id}", value: "{estado.id}", "{estado.nombre}" }
                            }
                        }
                        textarea {
                            class: "field textarea",
                            placeholder: "Descripción",
                            value: descripcion(),
                            oninput: move |evt| descripcion.set(evt.value()),
                        }
                        label {
                            class: "button-file-upload",
                            {archivo().map(|f| f.name).unwrap_or_else(|| "Seleccionar Archivo".to_string())}
                            input {
                                r#type: "file",
                                class: "file-input",
                                onchange: handle_file,
                            }
                        }
                        button {
                            class: "button-primary",
                            disabled: saving(),
                            onclick: handle_save,
                            if saving() { "Guardando..." } else { "Guardar" }
                        }
                        button {
                            class: "button-cancel",
                            onclick: move |_| modal_open.set(false),
                            "Cancelar"
                        }
                    }
                }
            }
        }
    }
}
