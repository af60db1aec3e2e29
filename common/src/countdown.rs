//! 次に会う日までのカウントダウン
//!
//! 時計とスケジューラを差し替えられるので、ブラウザなしで進行を確認できる。

use std::rc::Rc;

/// 期限を過ぎたときの表示
pub const COMPLETE_MESSAGE: &str = "It’s time! 💞";

/// 現在時刻と日時文字列の解釈
pub trait Clock {
    /// エポックからのミリ秒
    fn now_ms(&self) -> f64;

    /// 日時文字列をエポックミリ秒へ。解釈できなければNone
    fn parse_ms(&self, iso: &str) -> Option<f64>;
}

/// 一定間隔で呼び出すスケジューラ
///
/// 返したタスクをdropすると停止する。
pub trait Scheduler {
    type Task;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Task;
}

/// 残りミリ秒を "{d}d {h}h {m}m {s}s" に整形する
pub fn format_remaining(ms: f64) -> String {
    if ms <= 0.0 {
        return COMPLETE_MESSAGE.into();
    }
    if ms.is_nan() {
        return "NaNd NaNh NaNm NaNs".into();
    }
    if ms.is_infinite() {
        // 日数だけ無限大、残りの単位は剰余がNaNになる
        return "Infinityd NaNh NaNm NaNs".into();
    }

    let total = (ms / 1000.0).floor() as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}

/// カウントダウンタイマー
pub struct Countdown<C, S: Scheduler> {
    clock: Rc<C>,
    scheduler: S,
    period_ms: u32,
    display: Rc<dyn Fn(&str)>,
    task: Option<S::Task>,
}

impl<C: Clock + 'static, S: Scheduler> Countdown<C, S> {
    pub fn new(clock: C, scheduler: S, period_ms: u32, display: impl Fn(&str) + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            scheduler,
            period_ms,
            display: Rc::new(display),
            task: None,
        }
    }

    /// 前回のタスクを止め、すぐに描画してから定期更新を始める
    pub fn start(&mut self, target_iso: &str) {
        self.cancel();

        let target = self.clock.parse_ms(target_iso).unwrap_or(f64::NAN);
        let clock = Rc::clone(&self.clock);
        let display = Rc::clone(&self.display);
        let render = move || display(&format_remaining(target - clock.now_ms()));

        render();
        self.task = Some(self.scheduler.every(self.period_ms, Box::new(render)));
    }

    pub fn cancel(&mut self) {
        self.task = None;
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::cell::{Cell, RefCell};

    type Ticks = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    /// 手動で進めるスケジューラ
    #[derive(Clone, Default)]
    struct ManualScheduler {
        ticks: Ticks,
    }

    struct ManualTask {
        ticks: Ticks,
        index: usize,
    }

    impl Drop for ManualTask {
        fn drop(&mut self) {
            self.ticks.borrow_mut()[self.index] = None;
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn every(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> ManualTask {
            let mut ticks = self.ticks.borrow_mut();
            ticks.push(Some(tick));
            ManualTask {
                ticks: Rc::clone(&self.ticks),
                index: ticks.len() - 1,
            }
        }
    }

    impl ManualScheduler {
        fn fire(&self) {
            for tick in self.ticks.borrow_mut().iter_mut().flatten() {
                tick();
            }
        }

        fn active(&self) -> usize {
            self.ticks.borrow().iter().filter(|t| t.is_some()).count()
        }
    }

    /// 任意の時刻を返す時計（日時はUTCとして解釈）
    #[derive(Clone)]
    struct FixedClock {
        now: Rc<Cell<f64>>,
    }

    impl Clock for FixedClock {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }

        fn parse_ms(&self, iso: &str) -> Option<f64> {
            NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|dt| dt.and_utc().timestamp_millis() as f64)
        }
    }

    // 2026-01-01T00:00Z
    const NEW_YEAR_MS: f64 = 1_767_225_600_000.0;

    fn setup() -> (
        Countdown<FixedClock, ManualScheduler>,
        FixedClock,
        ManualScheduler,
        Rc<RefCell<Vec<String>>>,
    ) {
        let clock = FixedClock {
            now: Rc::new(Cell::new(NEW_YEAR_MS)),
        };
        let scheduler = ManualScheduler::default();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        let countdown = Countdown::new(clock.clone(), scheduler.clone(), 1000, move |text: &str| {
            sink.borrow_mut().push(text.to_string())
        });
        (countdown, clock, scheduler, shown)
    }

    #[test]
    fn test_format_one_of_each_unit() {
        assert_eq!(format_remaining(90_061_000.0), "1d 1h 1m 1s");
    }

    #[test]
    fn test_format_truncates_partial_seconds() {
        assert_eq!(format_remaining(59_999.0), "0d 0h 0m 59s");
        assert_eq!(format_remaining(1.0), "0d 0h 0m 0s");
        assert_eq!(format_remaining(86_399_000.0), "0d 23h 59m 59s");
    }

    #[test]
    fn test_format_past_or_now_is_complete() {
        assert_eq!(format_remaining(0.0), COMPLETE_MESSAGE);
        assert_eq!(format_remaining(-5_000.0), COMPLETE_MESSAGE);
    }

    #[test]
    fn test_format_nan() {
        assert_eq!(format_remaining(f64::NAN), "NaNd NaNh NaNm NaNs");
    }

    #[test]
    fn test_format_infinite_target() {
        assert_eq!(format_remaining(f64::INFINITY), "Infinityd NaNh NaNm NaNs");
        assert_eq!(format_remaining(f64::NEG_INFINITY), COMPLETE_MESSAGE);
    }

    #[test]
    fn test_start_renders_immediately_and_on_tick() {
        let (mut countdown, clock, scheduler, shown) = setup();
        countdown.start("2026-01-02T01:01");
        assert!(countdown.is_running());
        assert_eq!(shown.borrow().last().unwrap(), "1d 1h 1m 0s");

        clock.now.set(NEW_YEAR_MS + 1000.0);
        scheduler.fire();
        assert_eq!(shown.borrow().last().unwrap(), "1d 1h 0m 59s");
        assert_eq!(shown.borrow().len(), 2);
    }

    #[test]
    fn test_target_in_past_shows_complete() {
        let (mut countdown, _, _, shown) = setup();
        countdown.start("2025-12-31T23:00");
        assert_eq!(shown.borrow().last().unwrap(), COMPLETE_MESSAGE);
    }

    #[test]
    fn test_restart_replaces_previous_task() {
        let (mut countdown, _, scheduler, shown) = setup();
        countdown.start("2026-01-02T00:00");
        countdown.start("2026-01-03T00:00");
        assert_eq!(scheduler.active(), 1);

        shown.borrow_mut().clear();
        scheduler.fire();
        assert_eq!(*shown.borrow(), vec!["2d 0h 0m 0s".to_string()]);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let (mut countdown, _, scheduler, shown) = setup();
        countdown.start("2026-01-02T00:00");
        countdown.cancel();
        assert!(!countdown.is_running());
        assert_eq!(scheduler.active(), 0);

        let before = shown.borrow().len();
        scheduler.fire();
        assert_eq!(shown.borrow().len(), before);
    }

    #[test]
    fn test_unparseable_target_renders_nan() {
        let (mut countdown, _, _, shown) = setup();
        countdown.start("someday");
        assert_eq!(shown.borrow().last().unwrap(), "NaNd NaNh NaNm NaNs");
    }
}
