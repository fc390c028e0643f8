use gloo_storage::{LocalStorage, Storage};
use remark_client::{api::Error, Backend};

/// The browser's `window.localStorage`
pub struct LocalBackend;

impl Backend for LocalBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("reading {key:?}: {e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Error> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("writing {key:?}: {e:?}")))
    }
}
