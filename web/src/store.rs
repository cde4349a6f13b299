use flagfall_core::{BestTimeStore, Seconds};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

use crate::utils::StorageKey;

/// Best time kept in the browser's LocalStorage under a single key.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LocalBestTime;

impl StorageKey for LocalBestTime {
    const KEY: &'static str = "flagfall:best-time";
}

impl BestTimeStore for LocalBestTime {
    fn load_best_time(&self) -> Option<Seconds> {
        match LocalStorage::get(Self::KEY) {
            Ok(secs) => Some(secs),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log::warn!("Could not read best time from local storage: {:?}", err);
                None
            }
        }
    }

    fn save_best_time(&mut self, secs: Seconds) {
        if let Err(err) = LocalStorage::set(Self::KEY, secs) {
            log::error!("Could not save best time to local storage: {:?}", err);
        }
    }
}
