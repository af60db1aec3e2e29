//! ブラウザの時計と定期実行

use gloo::timers::callback::Interval;
use love_distance_common::{Clock, Scheduler};

/// `Date.now()` と `Date.parse()`
///
/// `datetime-local` の値はローカル時刻として解釈される。
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn parse_ms(&self, iso: &str) -> Option<f64> {
        let ms = js_sys::Date::parse(iso);
        (!ms.is_nan()).then_some(ms)
    }
}

/// `setInterval` ベースのスケジューラ。Intervalをdropすると解除される
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Task = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_parse_datetime_local_value() {
        let ms = JsClock.parse_ms("2030-02-14T19:00").expect("parse failed");
        assert!(ms > JsClock.now_ms());
    }

    #[wasm_bindgen_test]
    fn wasm_parse_rejects_garbage() {
        assert!(JsClock.parse_ms("someday").is_none());
    }
}
