//! ページ設定
//!
//! ストレージキー、初期値、国名サフィックスなど、起動時に一度だけ組み立てて
//! 各コンポーネントへ渡す値をまとめる。

use crate::settings::SettingsRecord;

/// 設定レコードを保存するキー
pub const SETTINGS_KEY: &str = "loveDistanceSettings";

/// 次に会う日時を保存するキー
pub const MEETUP_DATE_KEY: &str = "nextMeetupDate";

/// カウントダウンの更新間隔（ミリ秒）
pub const TICK_INTERVAL_MS: u32 = 1000;

/// 地点の左右
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// 都市名に付ける固定の国名
    ///
    /// A側とB側で国が異なる。汎用のローカライズではない。
    pub fn country(self) -> &'static str {
        match self {
            Side::A => "Poland",
            Side::B => "India",
        }
    }

    /// 都市名が空欄のときに使う表示名
    pub fn placeholder(self) -> &'static str {
        match self {
            Side::A => "City A",
            Side::B => "City B",
        }
    }
}

/// 起動時に組み立てるページ設定
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub settings_key: String,
    pub meetup_date_key: String,
    pub defaults: SettingsRecord,
    pub tick_interval_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            settings_key: SETTINGS_KEY.into(),
            meetup_date_key: MEETUP_DATE_KEY.into(),
            defaults: SettingsRecord::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_keys() {
        let config = PageConfig::default();
        assert_eq!(config.settings_key, "loveDistanceSettings");
        assert_eq!(config.meetup_date_key, "nextMeetupDate");
        assert_eq!(config.tick_interval_ms, 1000);
    }

    #[test]
    fn test_side_countries_differ() {
        assert_eq!(Side::A.country(), "Poland");
        assert_eq!(Side::B.country(), "India");
        assert_eq!(Side::A.placeholder(), "City A");
        assert_eq!(Side::B.placeholder(), "City B");
    }
}
