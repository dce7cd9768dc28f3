use crate::models::Usuario;

/// Persistence backend for the single logged-in user record.
///
/// There is exactly one slot: `save` replaces whatever was stored before, and
/// the presence of a record is the sole signal of "logged in". Implementations
/// never surface I/O or parse failures to the caller — a record that cannot be
/// read is treated as absent.
pub trait SessionStore {
    /// Return the stored user record, or `None` if nothing is stored or the
    /// stored value fails to parse.
    async fn load(&self) -> Option<Usuario>;

    /// Persist the record, replacing any prior value.
    async fn save(&self, user: &Usuario);

    /// Remove the stored record. Idempotent when already absent.
    async fn clear(&self);
}
