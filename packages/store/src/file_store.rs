//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`SessionStore`] implementation that persists the user
//! record as a single JSON file. It is used on desktop and mobile platforms to
//! keep the session across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json           # serialized user record
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/incidencias/` |
//! | Linux | `~/.local/share/incidencias/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\incidencias\` |
//! | Android | App-internal storage (via `dirs`) |

use std::path::PathBuf;

use crate::models::Usuario;
use crate::session::SessionStore;

const SESSION_FILE: &str = "session.json";

/// Filesystem-backed SessionStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }
}

impl SessionStore for FileStore {
    async fn load(&self) -> Option<Usuario> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        match serde_json::from_str(&content) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("stored session did not parse, treating as absent: {e}");
                None
            }
        }
    }

    async fn save(&self, user: &Usuario) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("could not create session directory: {e}");
            return;
        }
        match serde_json::to_string(user) {
            Ok(json) => {
                if let Err(e) = std::fs::write(self.session_path(), json) {
                    tracing::warn!("could not write session file: {e}");
                }
            }
            Err(e) => tracing::warn!("could not serialize session: {e}"),
        }
    }

    async fn clear(&self) {
        if let Err(e) = std::fs::remove_file(self.session_path()) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove session file: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> Usuario {
        serde_json::from_str(r#"{"id":7,"nombre":"Ana","id_perfil":3,"email":"ana@example.com"}"#)
            .unwrap()
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        assert!(store.load().await.is_none());

        let user = sample_user();
        store.save(&user).await;

        // Re-open from the same directory
        let store2 = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store2.load().await, Some(user));
    }

    #[tokio::test]
    async fn test_save_replaces_prior_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.save(&sample_user()).await;
        let other: Usuario =
            serde_json::from_str(r#"{"id":9,"nombre":"Luis","id_perfil":2}"#).unwrap();
        store.save(&other).await;

        assert_eq!(store.load().await, Some(other));
    }

    #[tokio::test]
    async fn test_unparseable_session_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "not json {").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.save(&sample_user()).await;
        store.clear().await;
        assert!(store.load().await.is_none());

        // Clearing an already-empty store must not fail
        store.clear().await;
        assert!(store.load().await.is_none());
    }
}
