use crate::core::SettingsRepository;
use web_sys as web;

/// `window.localStorage`, falling back to no-ops when storage is unavailable
/// (private browsing, sandboxed iframes).
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| match w.local_storage() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[settings] localStorage unavailable: {:?}", e);
                None
            }
        });
        Self { storage }
    }
}

impl SettingsRepository for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no localStorage"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }
}
