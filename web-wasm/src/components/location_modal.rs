//! 地点編集ダイアログ

use crate::app::AppState;
use crate::dom;
use gloo::console::warn;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use love_distance_common::{FormField, LocationEditor};

#[component]
pub fn LocationModal(state: AppState, editor: RwSignal<LocationEditor>) -> impl IntoView {
    let backdrop = NodeRef::<html::Div>::new();
    let is_open = move || editor.with(|e| e.is_open());

    let close = move || {
        editor.update(|e| e.close());
        dom::set_scroll_locked(false);
    };

    let on_backdrop = move |ev: MouseEvent| {
        if dom::is_backdrop_click(&ev, backdrop.get_untracked().as_ref()) {
            editor.update(|e| e.backdrop_click());
            dom::set_scroll_locked(false);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut submitted = None;
        editor.update(|e| submitted = e.submit());
        let Some(record) = submitted else {
            return;
        };

        if let Err(err) = record.validate() {
            warn!("saving settings with", err.to_string());
        }
        if let Err(err) = state.store.with_value(|s| s.save(&record)) {
            warn!("settings not saved:", err.to_string());
        }
        state.refresh();
        dom::set_scroll_locked(false);
    };

    view! {
        <div
            id="locationModal"
            class="modal"
            class:show=is_open
            aria-hidden=move || dom::aria_hidden(is_open())
            node_ref=backdrop
            on:click=on_backdrop
        >
            <div class="modal__content" role="dialog" aria-modal="true">
                <button type="button" class="modal__close" on:click=move |_| close()>
                    "×"
                </button>
                <h2>"Edit locations"</h2>
                <form id="locForm" on:submit=on_submit>
                    <div class="settings-grid">
                        {FormField::ALL
                            .into_iter()
                            .map(|field| view! { <FormInput field=field editor=editor /> })
                            .collect_view()}
                    </div>
                    <div class="modal__actions">
                        <button
                            type="button"
                            class="btn btn-tertiary modal__close"
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormInput(field: FormField, editor: RwSignal<LocationEditor>) -> impl IntoView {
    let input_type = if field.is_coordinate() { "number" } else { "text" };

    view! {
        <div class="form-group">
            <label for=field.id()>{field.label()}</label>
            <input
                type=input_type
                id=field.id()
                step=field.is_coordinate().then_some("any")
                prop:value=move || editor.with(|e| e.form.get(field).to_string())
                on:input=move |ev| {
                    editor.update(|e| e.form.set(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}
