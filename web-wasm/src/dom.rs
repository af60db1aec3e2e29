//! body要素とオーバーレイの小さなDOM操作

use gloo::console::warn;
use wasm_bindgen::JsValue;
use web_sys::Event;

/// オーバーレイ表示中は背景のスクロールを止める
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        warn!("overflow style update failed:", err);
    }
}

/// クリックがオーバーレイ自身（中身の外側）で起きたか
pub fn is_backdrop_click<T: AsRef<JsValue>>(ev: &Event, backdrop: Option<&T>) -> bool {
    match (ev.target(), backdrop) {
        (Some(target), Some(backdrop)) => {
            AsRef::<JsValue>::as_ref(&target) == backdrop.as_ref()
        }
        _ => false,
    }
}

/// aria-hidden属性の値
pub fn aria_hidden(open: bool) -> &'static str {
    if open {
        "false"
    } else {
        "true"
    }
}
