//! 地点編集ダイアログの状態遷移
//!
//! 閉 → 開: 現在の設定をフォームへ読み込む（国名サフィックスは外す）
//! 開 → 閉: 閉じるボタン / 背景クリック / 送信成功

use crate::config::Side;
use crate::settings::SettingsRecord;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref POLAND_SUFFIX: Regex = Regex::new(r"(?i), Poland$").unwrap();
    static ref INDIA_SUFFIX: Regex = Regex::new(r"(?i), India$").unwrap();
    static ref POLAND: Regex = Regex::new(r"(?i)poland").unwrap();
    static ref INDIA: Regex = Regex::new(r"(?i)india").unwrap();
    static ref FLOAT_PREFIX: Regex =
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap();
}

/// ダイアログの開閉状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CityA,
    LatA,
    LngA,
    CityB,
    LatB,
    LngB,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::CityA,
        FormField::LatA,
        FormField::LngA,
        FormField::CityB,
        FormField::LatB,
        FormField::LngB,
    ];

    /// input要素のid
    pub fn id(self) -> &'static str {
        match self {
            FormField::CityA => "cityA",
            FormField::LatA => "latA",
            FormField::LngA => "lngA",
            FormField::CityB => "cityB",
            FormField::LatB => "latB",
            FormField::LngB => "lngB",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::CityA => "City A",
            FormField::LatA => "Latitude A",
            FormField::LngA => "Longitude A",
            FormField::CityB => "City B",
            FormField::LatB => "Latitude B",
            FormField::LngB => "Longitude B",
        }
    }

    pub fn is_coordinate(self) -> bool {
        !matches!(self, FormField::CityA | FormField::CityB)
    }
}

/// フォームの生の入力値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationForm {
    pub city_a: String,
    pub lat_a: String,
    pub lng_a: String,
    pub city_b: String,
    pub lat_b: String,
    pub lng_b: String,
}

impl LocationForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CityA => &self.city_a,
            FormField::LatA => &self.lat_a,
            FormField::LngA => &self.lng_a,
            FormField::CityB => &self.city_b,
            FormField::LatB => &self.lat_b,
            FormField::LngB => &self.lng_b,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::CityA => &mut self.city_a,
            FormField::LatA => &mut self.lat_a,
            FormField::LngA => &mut self.lng_a,
            FormField::CityB => &mut self.city_b,
            FormField::LatB => &mut self.lat_b,
            FormField::LngB => &mut self.lng_b,
        };
        *slot = value;
    }

    /// 設定からフォームを作る。都市名末尾の国名は外す
    pub fn from_settings(record: &SettingsRecord) -> Self {
        Self {
            city_a: strip_country(&record.city_a, Side::A),
            lat_a: record.lat_a.to_string(),
            lng_a: record.lng_a.to_string(),
            city_b: strip_country(&record.city_b, Side::B),
            lat_b: record.lat_b.to_string(),
            lng_b: record.lng_b.to_string(),
        }
    }

    /// 入力値から新しい設定を組み立てる
    ///
    /// 数値として読めない欄はNaNのまま通す。
    pub fn to_settings(&self) -> SettingsRecord {
        SettingsRecord {
            city_a: with_country(&self.city_a, Side::A),
            lat_a: parse_float(&self.lat_a),
            lng_a: parse_float(&self.lng_a),
            city_b: with_country(&self.city_b, Side::B),
            lat_b: parse_float(&self.lat_b),
            lng_b: parse_float(&self.lng_b),
        }
    }
}

/// 地点編集ダイアログ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationEditor {
    state: DialogState,
    pub form: LocationForm,
}

impl LocationEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn open(&mut self, current: &SettingsRecord) {
        self.form = LocationForm::from_settings(current);
        self.state = DialogState::Open;
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    /// 背景（ダイアログの外側）がクリックされた
    pub fn backdrop_click(&mut self) {
        self.close();
    }

    /// 送信して閉じる。開いていなければ何もしない
    ///
    /// 呼び出し側は返ったレコードを保存し、距離表示を更新する。
    pub fn submit(&mut self) -> Option<SettingsRecord> {
        if !self.is_open() {
            return None;
        }
        let record = self.form.to_settings();
        self.close();
        Some(record)
    }
}

fn strip_country(city: &str, side: Side) -> String {
    let suffix: &Regex = match side {
        Side::A => &*POLAND_SUFFIX,
        Side::B => &*INDIA_SUFFIX,
    };
    suffix.replace(city, "").into_owned()
}

/// 空欄ならプレースホルダ、国名を含まなければ「, 国名」を付ける
fn with_country(input: &str, side: Side) -> String {
    let raw = if input.is_empty() { side.placeholder() } else { input };
    let city = raw.trim();
    let country: &Regex = match side {
        Side::A => &*POLAND,
        Side::B => &*INDIA,
    };
    if country.is_match(city) {
        city.to_string()
    } else {
        format!("{}, {}", city, side.country())
    }
}

/// 先頭の数値部分だけを読む。読めなければNaN
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let Some(m) = FLOAT_PREFIX.find(trimmed) else {
        return f64::NAN;
    };
    let text = m.as_str();
    if let Some(rest) = text.strip_suffix("Infinity") {
        return if rest == "-" { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    text.parse().unwrap_or(f64::NAN)
}
