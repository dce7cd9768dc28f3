//! Shared session store constructor for all platforms.
//!
//! Returns a [`store::FileStore`] rooted at the platform data directory, so
//! the logged-in user survives app restarts.

/// Create the session store at `<data_dir>/incidencias/`.
pub fn make_session_store() -> store::FileStore {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("incidencias");
    store::FileStore::new(base)
}
