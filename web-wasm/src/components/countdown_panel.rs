//! カウントダウンコンポーネント

use crate::app::AppState;
use crate::timer::{IntervalScheduler, JsClock};
use gloo::console::{log, warn};
use gloo::dialogs::alert;
use leptos::prelude::*;
use love_distance_common::{Countdown, Error};

#[component]
pub fn CountdownPanel(state: AppState) -> impl IntoView {
    let (timer_text, set_timer_text) = signal(String::new());
    let (meet_date, set_meet_date) = signal(String::new());

    let countdown = StoredValue::new_local(Countdown::new(
        JsClock,
        IntervalScheduler,
        state.tick_interval_ms,
        move |text: &str| set_timer_text.set(text.to_string()),
    ));

    // 保存済みの日時があれば再開
    if let Some(saved) = state.store.with_value(|s| s.load_meetup_date()) {
        set_meet_date.set(saved.clone());
        countdown.update_value(|c| c.start(&saved));
        log!("countdown resumed:", saved);
    }

    let on_save = move |_| {
        let value = meet_date.get_untracked();
        match state.store.with_value(|s| s.save_meetup_date(&value)) {
            Ok(()) => {}
            Err(Error::MissingMeetupDate) => {
                alert(&Error::MissingMeetupDate.to_string());
                return;
            }
            Err(err) => warn!("meetup date not saved:", err.to_string()),
        }
        countdown.update_value(|c| c.start(&value));
    };

    view! {
        <section class="countdown">
            <h2>"Next meetup"</h2>
            <div class="form-group">
                <label for="meetDate">"Date & time"</label>
                <input
                    type="datetime-local"
                    id="meetDate"
                    prop:value=move || meet_date.get()
                    on:input=move |ev| set_meet_date.set(event_target_value(&ev))
                />
                <button id="saveDateBtn" class="btn btn-primary btn-small" on:click=on_save>
                    "Save"
                </button>
            </div>
            <p id="timer" class="timer">{move || timer_text.get()}</p>
        </section>
    }
}
