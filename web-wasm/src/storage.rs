//! localStorage-backed key/value store

use love_distance_common::{Error, KeyValueStore, Result};

/// ブラウザのlocalStorage
///
/// 呼び出しごとにwindowから取得するので、状態は持たない。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("get_item({}) failed: {:?}", key, e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("set_item({}) failed: {:?}", key, e)))
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().ok_or(Error::StorageUnavailable)?;
    window
        .local_storage()
        .map_err(|e| Error::Storage(format!("localStorage error: {:?}", e)))?
        .ok_or(Error::StorageUnavailable)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use love_distance_common::{PageConfig, SettingsRecord, SettingsStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_settings_round_trip_through_local_storage() {
        let config = PageConfig {
            settings_key: "loveDistanceSettings.test".into(),
            meetup_date_key: "nextMeetupDate.test".into(),
            ..PageConfig::default()
        };
        let store = SettingsStore::new(BrowserStorage, &config);
        let record = SettingsRecord {
            city_a: "Łódź, Poland".into(),
            ..SettingsRecord::default()
        };

        store.save(&record).expect("save failed");
        assert_eq!(store.load(), record);

        store.save_meetup_date("2030-02-14T19:00").expect("save failed");
        assert_eq!(store.load_meetup_date().as_deref(), Some("2030-02-14T19:00"));
    }
}
