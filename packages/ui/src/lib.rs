//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::make_session_store;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod attachments;
pub use attachments::open_attachment;

mod flash;
pub use flash::{show_flash, use_flash, Flash};

mod tag_input;
pub use tag_input::TagInput;

mod app_shell;
pub use app_shell::AppShell;

pub mod views;
pub use views::{IncidentDetailView, IncidentListView, LoginView, NewIncidentView};
