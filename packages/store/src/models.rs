//! # Session domain models
//!
//! Defines the locally cached user record and the capability set derived from
//! its profile. These types are `Serialize + Deserialize` so the user record
//! can round-trip through the session store exactly as the server returned it.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Usuario`] | The logged-in user as returned by the login endpoint. Carries the server id, display name, the numeric profile discriminator `id_perfil`, and any extra fields the server sent (preserved verbatim via `#[serde(flatten)]`). |
//! | [`Capabilities`] | The set of UI affordances the profile grants. Derived once when a session is established instead of comparing `id_perfil` on every screen. |

use serde::{Deserialize, Serialize};

/// Profile id of staff users, who author follow-ups on incidents.
pub const PROFILE_STAFF: u32 = 2;

/// Profile id of reporter users, who create new incidents.
pub const PROFILE_REPORTER: u32 = 3;

/// The user record returned by the login endpoint and cached locally.
///
/// Field names match the wire contract. Fields this client does not interpret
/// are kept in `extra` so a saved record stays equal to the server payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: u64,
    pub nombre: String,
    /// Numeric profile discriminator. See [`Capabilities::for_profile`].
    pub id_perfil: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Actions the current profile is allowed to start from the UI.
///
/// The server remains the authority on writes; this only controls whether the
/// corresponding affordances render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// May open the new-incident form.
    pub create_incidents: bool,
    /// May add follow-up entries to an incident.
    pub author_follow_ups: bool,
}

impl Capabilities {
    /// Derive capabilities from a profile id.
    ///
    /// Only the two observed profiles grant anything; an unknown id gets no
    /// gated affordance.
    pub fn for_profile(id_perfil: u32) -> Self {
        Self {
            create_incidents: id_perfil == PROFILE_REPORTER,
            author_follow_ups: id_perfil == PROFILE_STAFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_profile_authors_follow_ups_only() {
        let caps = Capabilities::for_profile(PROFILE_STAFF);
        assert!(caps.author_follow_ups);
        assert!(!caps.create_incidents);
    }

    #[test]
    fn reporter_profile_creates_incidents_only() {
        let caps = Capabilities::for_profile(PROFILE_REPORTER);
        assert!(caps.create_incidents);
        assert!(!caps.author_follow_ups);
    }

    #[test]
    fn unknown_profile_gets_nothing() {
        for id in [0, 1, 4, 99] {
            assert_eq!(Capabilities::for_profile(id), Capabilities::default());
        }
    }

    #[test]
    fn usuario_preserves_unknown_fields() {
        let json = r#"{"id":7,"nombre":"Ana","id_perfil":3,"email":"ana@example.com","centro":"San Agustín"}"#;
        let user: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.extra["email"], "ana@example.com");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }
}
