//! Local storage persistence
//!
//! Session and general state survive page reloads by serializing into
//! `window.localStorage`. On non-browser targets (unit tests) storage is
//! absent and every operation degrades to a no-op.

use esp_core::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the session store snapshot
pub const SESSION_KEY: &str = "esp.session";
/// Storage key for the general store snapshot
pub const GENERAL_KEY: &str = "esp.general";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist a serializable snapshot under `key`.
pub fn save<T: Serialize>(key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()
            .ok_or_else(|| AppError::storage("local storage is unavailable"))?;
        storage
            .set_item(key, &json)
            .map_err(|_| AppError::storage(format!("failed to write '{key}'")))?;
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = json;
    Ok(())
}

/// Load a snapshot saved under `key`. Absent or corrupt entries yield `None`;
/// a snapshot that fails to parse is cleared so it cannot wedge startup.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()?;
        let json = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%key, error = %err, "discarding corrupt stored snapshot");
                let _ = storage.remove_item(key);
                None
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Remove the snapshot stored under `key`.
pub fn remove(key: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = key;
}
