use dioxus::prelude::*;
use store::SessionStore;

use crate::auth::AuthState;
use crate::{make_session_store, use_auth, use_flash};

/// Navigation chrome around the authenticated screens: a header greeting the
/// logged-in user and an explicit "Cerrar sesión" action.
///
/// Logout clears the stored session, resets the auth context, and hands
/// control back to the platform package for the route transition.
#[component]
pub fn AppShell(on_logout: EventHandler<()>, children: Element) -> Element {
    let mut auth = use_auth();
    let mut flash = use_flash();
    let nombre = auth().user.map(|u| u.nombre).unwrap_or_default();

    let handle_logout = move |_| async move {
        make_session_store().clear().await;
        auth.set(AuthState::anonymous());
        on_logout.call(());
    };

    rsx! {
        div {
            class: "app-shell",
            header {
                class: "app-header",
                span { class: "greeting", "Hola, {nombre}" }
                button {
                    class: "logout-button",
                    onclick: handle_logout,
                    "Cerrar sesión"
                }
            }
            main {
                class: "app-content",
                if let Some(msg) = flash().message {
                    button {
                        class: "alert alert-success flash",
                        onclick: move |_| flash.write().clear(),
                        "{msg}"
                    }
                }
                {children}
            }
        }
    }
}
