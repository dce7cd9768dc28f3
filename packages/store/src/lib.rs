pub mod models;

mod session;
pub use session::SessionStore;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

pub use models::{Capabilities, Usuario, PROFILE_REPORTER, PROFILE_STAFF};
