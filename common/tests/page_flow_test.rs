//! 編集 → 保存 → 距離表示の流れ
//!
//! ブラウザ側のイベント配線と同じ順序でコアを呼び出す

use love_distance_common::{
    format_km, DistanceView, FormField, KeyValueStore, LocationEditor, MemoryStore, PageConfig,
    SettingsStore,
};

fn store() -> (MemoryStore, SettingsStore<MemoryStore>) {
    let storage = MemoryStore::new();
    (storage.clone(), SettingsStore::new(storage, &PageConfig::default()))
}

/// 初回表示は初期値（ワルシャワ ↔ ニューデリー）
#[test]
fn test_first_visit_shows_defaults() {
    let (_, store) = store();
    let view = DistanceView::from(&store.load());

    assert_eq!(view.city_a, "Warsaw, Poland");
    assert_eq!(view.city_b, "New Delhi, India");
    assert_eq!(view.km, 5263.0);
}

/// 編集内容が保存され、次の表示に反映される
#[test]
fn test_edit_save_refresh() {
    let (storage, store) = store();
    let mut editor = LocationEditor::new();

    editor.open(&store.load());
    assert_eq!(editor.form.get(FormField::CityA), "Warsaw");

    editor.form.set(FormField::CityA, "Paris".into());
    editor.form.set(FormField::LatA, "48.8566".into());
    editor.form.set(FormField::LngA, "2.3522".into());
    let record = editor.submit().expect("開いているので送信できる");
    store.save(&record).expect("保存失敗");

    let view = DistanceView::from(&store.load());
    assert_eq!(view.city_a, "Paris, Poland");
    assert_eq!(view.city_b, "New Delhi, India");
    assert!(!editor.is_open());

    let raw = storage.get_item("loveDistanceSettings").unwrap().unwrap();
    assert!(raw.contains("Paris, Poland"));
}

/// 再編集しても国名が二重にならない
#[test]
fn test_reopen_does_not_duplicate_suffix() {
    let (_, store) = store();
    let mut editor = LocationEditor::new();

    for _ in 0..3 {
        editor.open(&store.load());
        let record = editor.submit().unwrap();
        store.save(&record).unwrap();
    }

    let record = store.load();
    assert_eq!(record.city_a, "Warsaw, Poland");
    assert_eq!(record.city_b, "New Delhi, India");
}

/// 数値でない入力は距離表示までNaNとして伝わる
#[test]
fn test_invalid_coordinate_reaches_display() {
    let (_, store) = store();
    let mut editor = LocationEditor::new();

    editor.open(&store.load());
    editor.form.set(FormField::LatB, "".into());
    store.save(&editor.submit().unwrap()).unwrap();

    let record = store.load();
    assert!(record.validate().is_err());
    assert_eq!(format_km(DistanceView::from(&record).km), "NaN");
}
