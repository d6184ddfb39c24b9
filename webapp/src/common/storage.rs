use gloo_console::warn as console_warn;
use gloo_storage::{LocalStorage, SessionStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use storefront::scroll::OffsetStore;

// gloo panics when it cannot reach the storage object at all (privacy modes, sandboxed
// iframes), so every helper here checks with web_sys first and only hands off to gloo
// when the storage is actually there
pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("keystone_{}", key);

    if !local_storage_available() {
        console_warn!(format!("Local storage unavailable, not saving {key}"));
        return;
    }

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_warn!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("keystone_{}", key);

    if !local_storage_available() {
        return Err(anyhow::Error::msg("Local storage unavailable"));
    }

    LocalStorage::get(key.clone()).map_err(|err| {
        console_warn!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// SessionOffsetStore
//
// mirrors the scroll tracker's offsets into sessionStorage, so that a reload of the tab
// still lands where the reader left off.  each route gets its own key under the prefix
pub struct SessionOffsetStore {
    prefix: String,
}

impl SessionOffsetStore {
    pub fn new(prefix: &str) -> Self {
        SessionOffsetStore {
            prefix: prefix.to_owned(),
        }
    }

    fn key(&self, route_key: &str) -> String {
        format!("{}:{}", self.prefix, route_key)
    }
}

fn local_storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some()
}

pub fn session_storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.session_storage().ok().flatten())
        .is_some()
}

impl OffsetStore for SessionOffsetStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<f64>> {
        let key = self.key(key);

        if !session_storage_available() {
            return Err(anyhow::Error::msg("session storage unavailable"));
        }

        match SessionStorage::get::<f64>(&key) {
            Ok(offset) => Ok(Some(offset)),
            // an absent key is the common case, not a failure
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(anyhow::Error::msg(format!(
                "session storage {key} is not an offset: {err}"
            ))),
        }
    }

    fn write(&mut self, key: &str, offset: f64) -> anyhow::Result<()> {
        let key = self.key(key);

        if !session_storage_available() {
            return Err(anyhow::Error::msg("session storage unavailable"));
        }

        SessionStorage::set(&key, offset).map_err(|err| {
            console_warn!(format!("Failed to set session storage {key}: {err}"));
            anyhow::Error::msg(format!("session storage write failed for {key}"))
        })
    }
}
