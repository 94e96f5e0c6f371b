use gloo::storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};

/// Types that live under a fixed `localStorage` key.
pub trait StorageKey {
    const KEY: &'static str;
}

pub trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned> LocalOrDefault for Option<T> {
    fn local_or_default() -> Self {
        match LocalStorage::get(T::KEY) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("nothing usable stored at {}: {}", T::KEY, err);
                None
            }
        }
    }
}

pub trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for Option<T> {
    fn local_save(&self) {
        match self {
            Some(value) => {
                if let Err(err) = LocalStorage::set(T::KEY, value) {
                    log::error!("failed to save {}: {:?}", T::KEY, err);
                }
            }
            None => LocalStorage::delete(T::KEY),
        }
    }
}
