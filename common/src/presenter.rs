//! 距離表示

use crate::geo::distance_km;
use crate::settings::SettingsRecord;

/// 距離表示に書き込む値
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceView {
    pub km: f64,
    pub city_a: String,
    pub city_b: String,
}

impl From<&SettingsRecord> for DistanceView {
    fn from(record: &SettingsRecord) -> Self {
        let km = distance_km(record.lat_a, record.lng_a, record.lat_b, record.lng_b);
        Self {
            km,
            city_a: record.city_a.clone(),
            city_b: record.city_b.clone(),
        }
    }
}

/// ロケールに依存しない整形（5263 → "5,263"）
///
/// ブラウザではロケール書式を使い、非有限値とネイティブ環境だけこちらを使う。
pub fn format_km(km: f64) -> String {
    if km.is_nan() {
        return "NaN".into();
    }
    if km.is_infinite() {
        return if km > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let digits = format!("{:.0}", km.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if km < 0.0 && digits != "0" {
        grouped.insert(0, '-');
    }
    grouped
}
