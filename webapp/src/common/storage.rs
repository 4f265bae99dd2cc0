use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, SessionStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use portfolio::{STORAGE_PREFIX, gate::SessionStore};

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("{STORAGE_PREFIX}_{key}");

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a key that was never written is the normal first-visit case, not an error
pub fn get_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("{STORAGE_PREFIX}_{key}");

    match LocalStorage::get(key.clone()) {
        Ok(val) => Some(val),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            None
        }
    }
}

// gate flags live in sessionStorage under their bare key (`project-auth-<slug>`), with the
// json value `true`
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn get_flag(&self, key: &str) -> Option<bool> {
        SessionStorage::get(key).ok()
    }

    fn set_flag(&mut self, key: &str, value: bool) -> anyhow::Result<()> {
        SessionStorage::set(key, value).map_err(|err| {
            console_error!(format!("Failed to set session storage {key}: {err}"));
            anyhow::Error::msg("Session storage failure, see console log")
        })
    }
}
