use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to access storage key `{0}`")]
    Access(String),
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;
    use web_sys::Storage;

    fn local_storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }
}

// Host targets keep values in a thread-local map so session persistence can
// be exercised by tests without a browser.
#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::StorageError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        STORE.with(|store| Ok(store.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
            Ok(())
        })
    }
}

pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    backend::get_item(key)
}

pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    backend::set_item(key, value)
}

pub fn remove_item(key: &str) -> Result<(), StorageError> {
    backend::remove_item(key)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        set_item("storage-test-key", "value").unwrap();
        assert_eq!(
            get_item("storage-test-key").unwrap(),
            Some("value".to_string())
        );
        remove_item("storage-test-key").unwrap();
        assert_eq!(get_item("storage-test-key").unwrap(), None);
    }

    #[test]
    fn get_missing_key_is_none() {
        assert_eq!(get_item("storage-never-written").unwrap(), None);
    }
}
