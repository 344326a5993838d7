//! localStorage による永続化スロット

use chili_ai_common::{Error, KeyValueStore, Result};

use crate::api::js_error_message;

/// ブラウザの localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| Error::Storage("window tidak tersedia".to_string()))?
        .local_storage()
        .map_err(|e| Error::Storage(js_error_message(&e)))?
        .ok_or_else(|| Error::Storage("localStorage tidak tersedia".to_string()))
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }

    fn clear(&self, key: &str) -> Result<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }
}
