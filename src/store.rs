use std::rc::Rc;

use shared::{KvStorage, MemoryStorage, StoreError};
use web_sys::Storage;

use crate::storage;

/// The page's persistent storage: `localStorage`, or memory when the browser refuses it.
pub enum PageStorage {
    Local(Storage),
    Memory(MemoryStorage),
}

thread_local! {
    static PAGE_STORAGE: Rc<PageStorage> = Rc::new(PageStorage::open());
}

impl PageStorage {
    /// The storage every component of the page reads and writes, opened on first use.
    pub fn shared() -> Rc<PageStorage> {
        PAGE_STORAGE.with(Rc::clone)
    }

    fn open() -> PageStorage {
        match storage() {
            Some(storage) => PageStorage::Local(storage),
            None => {
                log::warn!("localStorage is unavailable, nothing will persist past this page");
                PageStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KvStorage for PageStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            PageStorage::Local(storage) => storage.get_item(key).unwrap_or_default(),
            PageStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            PageStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| StoreError::Write(format!("{err:?}"))),
            PageStorage::Memory(storage) => storage.set(key, value),
        }
    }
}
