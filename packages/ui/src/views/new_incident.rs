use std::time::Instant;

use dioxus::prelude::*;

use api::{FileAttachment, IncidentDraft};

use crate::{show_flash, use_auth, use_flash, TagInput};

const PRIORITIES: [(&str, &str); 3] = [("1", "BAJA"), ("2", "MEDIA"), ("3", "ALTA")];

/// New-incident form.
///
/// Validation order is title, student, priority, keywords, description; the
/// first failing check blocks the submit before any network call. The whole
/// seconds the form was open travel along as `tiempo_formulario`. On success
/// the server's confirmation goes to the shell banner and the caller navigates
/// back; on failure every entered value stays put.
#[component]
pub fn NewIncidentView(on_done: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut flash = use_flash();
    // Wall-clock start of the authoring session
    let opened_at = use_hook(Instant::now);

    let mut titulo = use_signal(String::new);
    let mut alumno_id = use_signal(|| Option::<u64>::None);
    let mut prioridad = use_signal(|| Option::<String>::None);
    let palabras_clave = use_signal(Vec::<String>::new);
    let mut descripcion = use_signal(String::new);
    let mut foto = use_signal(|| Option::<FileAttachment>::None);
    let mut busqueda = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let alumnos = use_resource(move || async move {
        match api::Client::new().alumnos().await {
            Ok(resp) if resp.success => resp.data.unwrap_or_default(),
            Ok(resp) => {
                tracing::warn!("student roster fetch rejected: {}", resp.message);
                error.set(Some("No se pudieron cargar los alumnos".to_string()));
                Vec::new()
            }
            Err(_) => {
                error.set(Some("No se pudieron cargar los alumnos".to_string()));
                Vec::new()
            }
        }
    });

    let handle_photo = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(path) = file_engine.files().first().cloned() {
                if let Some(bytes) = file_engine.read_file(&path).await {
                    let name = path.rsplit('/').next().unwrap_or(&path).to_string();
                    let mime = FileAttachment::mime_for(&name);
                    foto.set(Some(FileAttachment { name, mime, bytes }));
                }
            }
        }
    };

    let handle_submit = move |_| async move {
        let draft = IncidentDraft {
            titulo: titulo(),
            alumno_id: alumno_id(),
            prioridad: prioridad(),
            palabras_clave: palabras_clave(),
            descripcion: descripcion(),
            foto: foto(),
        };
        if let Err(msg) = draft.validate() {
            error.set(Some(msg.to_string()));
            return;
        }
        let Some(user) = auth().user else {
            return;
        };

        saving.set(true);
        let tiempo = opened_at.elapsed().as_secs();
        let result = api::Client::new().crear_incidencia(user.id, &draft, tiempo).await;
        match result {
            Ok(resp) if resp.success => {
                show_flash(&mut flash, resp.message_or("Incidencia registrada correctamente"));
                on_done.call(());
            }
            Ok(resp) => {
                error.set(Some(
                    resp.message_or("Error al registrar la incidencia").to_string(),
                ));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        saving.set(false);
    };

    // Client-side roster filter for the student picker
    let filtered_alumnos = {
        let query = busqueda().to_lowercase();
        alumnos()
            .unwrap_or_default()
            .into_iter()
            .filter(|a| query.is_empty() || a.nombre.to_lowercase().contains(&query))
            .collect::<Vec<_>>()
    };

    rsx! {
        div {
            class: "new-incident-screen",
            h1 { class: "screen-title", "Nueva Incidencia" }
            if let Some(msg) = error() {
                div { class: "alert alert-error", "{msg}" }
            }
            input {
                class: "field",
                r#type: "text",
                placeholder: "Título",
                value: titulo(),
                oninput: move |evt| titulo.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "search",
                placeholder: "Buscar alumno...",
                value: busqueda(),
                oninput: move |evt| busqueda.set(evt.value()),
            }
            select {
                class: "field",
                value: alumno_id().map(|v| v.to_string()).unwrap_or_default(),
                onchange: move |evt| alumno_id.set(evt.value().parse().ok()),
                option { value: "", disabled: true, selected: alumno_id().is_none(), "Seleccione un alumno" }
                for alumno in filtered_alumnos {
                    option { key: "{alumno.id}", value: "{alumno.id}", "{alumno.nombre}" }
                }
            }
            select {
                class: "field",
                value: prioridad().unwrap_or_default(),
                onchange: move |evt| {
                    let value = evt.value();
                    prioridad.set((!value.is_empty()).then_some(value));
                },
                option { value: "", disabled: true, selected: prioridad().is_none(), "Seleccione una prioridad" }
                for (value, label) in PRIORITIES {
                    option { key: "{value}", value: "{value}", "{label}" }
                }
            }
            label {
                class: "image-picker",
                {foto().map(|f| f.name).unwrap_or_else(|| "Seleccionar Imagen".to_string())}
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "file-input",
                    onchange: handle_photo,
                }
            }
            TagInput { tags: palabras_clave }
            textarea {
                class: "field textarea",
                placeholder: "Descripción",
                value: descripcion(),
                oninput: move |evt| descripcion.set(evt.value()),
            }
            button {
                class: "button-primary",
                disabled: saving(),
                onclick: handle_submit,
                if saving() { "Guardando..." } else { "Guardar" }
            }
        }
    }
}
