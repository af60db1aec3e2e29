//! ブラウザのロケールで数値を整形する

use js_sys::{Array, Intl, Object};
use love_distance_common::format_km;
use wasm_bindgen::JsValue;

/// `Number.prototype.toLocaleString()` と同じ既定ロケールで整形する
///
/// NaNや無限大、Intlが使えない場合はロケール非依存の整形に戻す。
pub fn format_distance(km: f64) -> String {
    if !km.is_finite() {
        return format_km(km);
    }
    let formatter = Intl::NumberFormat::new(&Array::new(), &Object::new());
    formatter
        .format()
        .call1(&JsValue::UNDEFINED, &JsValue::from_f64(km))
        .ok()
        .and_then(|formatted| formatted.as_string())
        .unwrap_or_else(|| format_km(km))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_format_distance_matches_to_locale_string() {
        let expected = js_sys::Number::from(5263.0)
            .to_locale_string("default")
            .as_string()
            .expect("toLocaleString failed");
        assert_eq!(format_distance(5263.0), expected);
    }

    #[wasm_bindgen_test]
    fn wasm_format_distance_groups_large_values() {
        let formatted = format_distance(1_234_567.0);
        // 区切り文字はロケール次第だが、7桁なら必ず区切られる
        assert!(formatted.len() > "1234567".len(), "区切りなし: {}", formatted);
        assert!(formatted.starts_with('1'));
    }

    #[wasm_bindgen_test]
    fn wasm_format_distance_non_finite() {
        assert_eq!(format_distance(f64::NAN), "NaN");
        assert_eq!(format_distance(f64::INFINITY), "∞");
    }
}
