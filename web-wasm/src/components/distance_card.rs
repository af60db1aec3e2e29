//! 距離表示コンポーネント

use crate::locale::format_distance;
use leptos::prelude::*;
use love_distance_common::{DistanceView, SettingsRecord};

#[component]
pub fn DistanceCard<F>(settings: ReadSignal<SettingsRecord>, on_edit: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let distance = Memo::new(move |_| DistanceView::from(&settings.get()));

    view! {
        <section class="distance-card">
            <p class="distance">
                <span id="distanceKm">{move || distance.with(|d| format_distance(d.km))}</span>
                " km"
            </p>
            <p class="cities">
                <span class="cityA">{move || distance.with(|d| d.city_a.clone())}</span>
                " ↔ "
                <span class="cityB">{move || distance.with(|d| d.city_b.clone())}</span>
            </p>
            <button
                id="editLocationsBtn"
                class="btn btn-secondary btn-small"
                on:click={
                    let on_edit = on_edit.clone();
                    move |_| on_edit(())
                }
            >
                "Edit locations"
            </button>
        </section>
    }
}
