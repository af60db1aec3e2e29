//! Love Distance Common Library
//!
//! ブラウザ(WASM)ページから使う描画非依存のロジック:
//! 距離計算、設定の保存、編集ダイアログ・カウントダウン・ギャラリーの状態遷移

pub mod config;
pub mod countdown;
pub mod editor;
pub mod error;
pub mod gallery;
pub mod geo;
pub mod presenter;
pub mod settings;

pub use config::{PageConfig, Side};
pub use countdown::{format_remaining, Clock, Countdown, Scheduler, COMPLETE_MESSAGE};
pub use editor::{parse_float, DialogState, FormField, LocationEditor, LocationForm};
pub use error::{Error, Result};
pub use gallery::{GalleryImage, Lightbox};
pub use geo::distance_km;
pub use presenter::{format_km, DistanceView};
pub use settings::{KeyValueStore, MemoryStore, SettingsRecord, SettingsStore};
