//! 設定レコードとキーバリューストア
//!
//! 2地点の名前と座標を1つのJSONオブジェクトとして丸ごと保存する。
//! 部分更新はない。複数タブからの同時編集は後勝ち。

use crate::config::PageConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// 保存される設定レコード
///
/// `{"cityA", "latA", "lngA", "cityB", "latB", "lngB"}` の6フィールド。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub city_a: String,
    #[serde(deserialize_with = "nan_if_null")]
    pub lat_a: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub lng_a: f64,
    pub city_b: String,
    #[serde(deserialize_with = "nan_if_null")]
    pub lat_b: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub lng_b: f64,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            city_a: "Warsaw, Poland".into(),
            lat_a: 52.2297,
            lng_a: 21.0122,
            city_b: "New Delhi, India".into(),
            lat_b: 28.6139,
            lng_b: 77.2090,
        }
    }
}

impl SettingsRecord {
    /// 座標が範囲内か確認し、最初に外れたフィールドを返す
    ///
    /// NaNも範囲外として扱う。
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("latA", self.lat_a, 90.0),
            ("lngA", self.lng_a, 180.0),
            ("latB", self.lat_b, 90.0),
            ("lngB", self.lng_b, 180.0),
        ];
        for (field, value, limit) in checks {
            if !(-limit..=limit).contains(&value) {
                return Err(Error::CoordinateOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

// serde_jsonは非有限値をnullで書き出すので、読み込み時にNaNへ戻す
fn nan_if_null<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// 文字列キーバリューストア（ブラウザのlocalStorage相当）
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア
///
/// クローンは同じ中身を共有する。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 設定レコードと日時の読み書き
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    storage: S,
    settings_key: String,
    meetup_date_key: String,
    defaults: SettingsRecord,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(storage: S, config: &PageConfig) -> Self {
        Self {
            storage,
            settings_key: config.settings_key.clone(),
            meetup_date_key: config.meetup_date_key.clone(),
            defaults: config.defaults.clone(),
        }
    }

    /// 保存済みの設定を読み込む
    ///
    /// キーがない、読めない、JSONとして解釈できない場合は初期値を返す。
    pub fn load(&self) -> SettingsRecord {
        self.try_load()
            .ok()
            .flatten()
            .unwrap_or_else(|| self.defaults.clone())
    }

    fn try_load(&self) -> Result<Option<SettingsRecord>> {
        match self.storage.get_item(&self.settings_key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// レコード全体を書き込む
    pub fn save(&self, record: &SettingsRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.storage.set_item(&self.settings_key, &raw)
    }

    /// 保存済みの日時文字列
    pub fn load_meetup_date(&self) -> Option<String> {
        self.storage
            .get_item(&self.meetup_date_key)
            .ok()
            .flatten()
            .filter(|raw| !raw.is_empty())
    }

    /// 日時文字列をそのまま保存する。空なら何もせずエラー
    pub fn save_meetup_date(&self, raw: &str) -> Result<()> {
        if raw.is_empty() {
            return Err(Error::MissingMeetupDate);
        }
        self.storage.set_item(&self.meetup_date_key, raw)
    }
}
