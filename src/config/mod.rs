pub mod loader;

pub use loader::{load_credential, API_KEY_VAR};
