//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{Capabilities, SessionStore, Usuario};

use crate::make_session_store;

/// Authentication state for the application.
///
/// Established once when the app starts (or the user logs in) and threaded to
/// every screen through context, so screens never re-read storage ad hoc.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Usuario>,
    /// UI affordances the profile grants, derived once from `id_perfil`.
    pub caps: Capabilities,
    /// Whether the initial session read is still in flight.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            caps: Capabilities::default(),
            loading: true,
        }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            caps: Capabilities::default(),
            loading: false,
        }
    }

    pub fn authenticated(user: Usuario) -> Self {
        Self {
            caps: Capabilities::for_profile(user.id_perfil),
            user: Some(user),
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// The session store is read exactly once here; a stored record that fails to
/// load demotes the user to logged-out instead of crashing.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Read the stored session on mount
    let _ = use_resource(move || async move {
        match make_session_store().load().await {
            Some(user) => auth_state.set(AuthState::authenticated(user)),
            None => auth_state.set(AuthState::anonymous()),
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
