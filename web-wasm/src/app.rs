//! メインアプリケーションコンポーネント

use crate::components::{
    countdown_panel::CountdownPanel, distance_card::DistanceCard, header::Header,
    location_modal::LocationModal, photo_gallery::PhotoGallery,
};
use crate::dom;
use crate::storage::BrowserStorage;
use leptos::prelude::*;
use love_distance_common::{GalleryImage, LocationEditor, PageConfig, SettingsRecord, SettingsStore};

/// ページに載せる写真（src, alt）
const GALLERY: &[(&str, Option<&str>)] = &[
    ("img/gallery/first-date.jpg", Some("Our first date")),
    ("img/gallery/old-town.jpg", Some("Old Town, Warsaw")),
    ("img/gallery/india-gate.jpg", Some("India Gate at dusk")),
    ("img/gallery/airport.jpg", None),
    ("img/gallery/video-call.jpg", Some("Late-night video call")),
];

pub fn gallery_images() -> Vec<GalleryImage> {
    GALLERY
        .iter()
        .map(|(src, alt)| GalleryImage::new(*src, *alt))
        .collect()
}

/// アプリケーションの状態
///
/// 起動時に一度だけ作り、各コンポーネントへ渡す。
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: StoredValue<SettingsStore<BrowserStorage>>,
    pub settings: ReadSignal<SettingsRecord>,
    set_settings: WriteSignal<SettingsRecord>,
    pub tick_interval_ms: u32,
}

impl AppState {
    pub fn new(config: &PageConfig) -> Self {
        let store = SettingsStore::new(BrowserStorage, config);
        let (settings, set_settings) = signal(store.load());
        Self {
            store: StoredValue::new(store),
            settings,
            set_settings,
            tick_interval_ms: config.tick_interval_ms,
        }
    }

    /// 設定を読み直して距離表示を更新する
    pub fn refresh(&self) {
        self.set_settings.set(self.store.with_value(|s| s.load()));
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(&PageConfig::default());
    let editor = RwSignal::new(LocationEditor::new());

    let on_edit = move |_| {
        let current = state.store.with_value(|s| s.load());
        editor.update(|e| e.open(&current));
        dom::set_scroll_locked(true);
    };

    view! {
        <div class="container">
            <Header />

            <DistanceCard settings=state.settings on_edit=on_edit />

            <CountdownPanel state=state />

            <PhotoGallery images=gallery_images() />

            <LocationModal state=state editor=editor />
        </div>
    }
}
