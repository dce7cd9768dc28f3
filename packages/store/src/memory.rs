use std::sync::{Arc, Mutex};

use crate::models::Usuario;
use crate::session::SessionStore;

/// In-memory SessionStore for testing and as a non-durable fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    user: Arc<Mutex<Option<Usuario>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<Usuario> {
        self.user.lock().unwrap().clone()
    }

    async fn save(&self, user: &Usuario) {
        *self.user.lock().unwrap() = Some(user.clone());
    }

    async fn clear(&self) {
        *self.user.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> Usuario {
        serde_json::from_str(r#"{"id":7,"nombre":"Ana","id_perfil":3}"#).unwrap()
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert!(store.load().await.is_none());

        let user = sample_user();
        store.save(&user).await;
        assert_eq!(store.load().await, Some(user));

        store.clear().await;
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let store = MemoryStore::new();
        let alias = store.clone();

        store.save(&sample_user()).await;
        assert!(alias.load().await.is_some());

        alias.clear().await;
        assert!(store.load().await.is_none());
    }
}
