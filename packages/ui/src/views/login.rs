use dioxus::prelude::*;
use store::SessionStore;

use crate::auth::AuthState;
use crate::{make_session_store, use_auth};

/// Login screen.
///
/// Credentials are validated client-side before any network call. On
/// `success: true` the returned user record is persisted, the auth context is
/// established, and `on_login` fires so the caller can route to the
/// authenticated shell. Any other outcome leaves the user on this screen with
/// a message.
#[component]
pub fn LoginView(on_login: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // An existing session skips the form entirely
    use_effect(move || {
        if auth().user.is_some() {
            on_login.call(());
        }
    });

    let handle_login = move |_| async move {
        let email_value = email().trim().to_string();
        if let Err(msg) = api::forms::validate_credentials(&email_value, &password()) {
            error.set(Some(msg.to_string()));
            return;
        }

        loading.set(true);
        let result = api::Client::new().login(&email_value, &password()).await;
        match result {
            Ok(resp) if resp.success => {
                if let Some(user) = resp.data {
                    make_session_store().save(&user).await;
                    auth.set(AuthState::authenticated(user));
                    error.set(None);
                    on_login.call(());
                } else {
                    error.set(Some("Credenciales inválidas".to_string()));
                }
            }
            Ok(resp) => {
                error.set(Some(resp.message_or("Credenciales inválidas").to_string()));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    };

    rsx! {
        div {
            class: "login-screen",
            h1 { class: "login-title", "Incidencias" }
            if let Some(msg) = error() {
                div { class: "alert alert-error", "{msg}" }
            }
            input {
                class: "field",
                r#type: "email",
                placeholder: "Usuario",
                value: email(),
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "password",
                placeholder: "Contraseña",
                value: password(),
                oninput: move |evt| password.set(evt.value()),
            }
            button {
                class: "button-primary",
                disabled: loading(),
                onclick: handle_login,
                if loading() {
                    "Cargando..."
                } else {
                    "Iniciar Sesión"
                }
            }
        }
    }
}
