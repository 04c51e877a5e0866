use anyhow::{bail, Context, Result};
use std::path::Path;

/// Key the news API credential is stored under in the env file.
pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// Load the value of `key` from an env-style `KEY=value` file.
///
/// The file is read directly; the process environment is neither consulted
/// nor modified. A missing file, a malformed line, or an absent or empty key
/// is a configuration error.
pub fn load_credential(path: &Path, key: &str) -> Result<String> {
    let entries = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read env file: {}", path.display()))?;

    for entry in entries {
        let (name, value) =
            entry.with_context(|| format!("Failed to parse env file: {}", path.display()))?;
        if name == key {
            if value.trim().is_empty() {
                bail!("{} is empty in {}", key, path.display());
            }
            return Ok(value);
        }
    }

    bail!("{} missing from {}", key, path.display())
}
