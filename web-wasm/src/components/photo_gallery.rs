//! 写真ギャラリーとライトボックス

use crate::dom;
use leptos::ev::{self, MouseEvent};
use leptos::html;
use leptos::prelude::*;
use love_distance_common::{GalleryImage, Lightbox};

#[component]
pub fn PhotoGallery(images: Vec<GalleryImage>) -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(images.clone()));
    let backdrop = NodeRef::<html::Div>::new();
    let is_open = move || lightbox.with(|lb| lb.is_open());

    let open = move |index: usize| {
        let mut opened = false;
        lightbox.update(|lb| opened = lb.open(index));
        if opened {
            dom::set_scroll_locked(true);
        }
    };

    let close = move || {
        lightbox.update(|lb| lb.close());
        dom::set_scroll_locked(false);
    };

    let on_backdrop = move |ev: MouseEvent| {
        if dom::is_backdrop_click(&ev, backdrop.get_untracked().as_ref()) {
            close();
        }
    };

    _ = window_event_listener(ev::keydown, move |ev| {
        if !lightbox.with_untracked(|lb| lb.is_open()) {
            return;
        }
        lightbox.update(|lb| {
            lb.handle_key(&ev.key());
        });
        if !lightbox.with_untracked(|lb| lb.is_open()) {
            dom::set_scroll_locked(false);
        }
    });

    // 閉じている間も直前の画像を保持する
    let shown = move || {
        lightbox.with(|lb| lb.images().get(lb.cursor()).cloned())
    };

    view! {
        <section class="gallery">
            <div class="grid-gallery">
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(index, image)| {
                        view! {
                            <img
                                src=image.src
                                alt=image.alt
                                loading="lazy"
                                on:click=move |_| open(index)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div
                id="lightbox"
                class="lightbox"
                class:open=is_open
                aria-hidden=move || dom::aria_hidden(is_open())
                node_ref=backdrop
                on:click=on_backdrop
            >
                <button type="button" class="close" on:click=move |_| close()>"×"</button>
                <button type="button" class="prev" on:click=move |_| lightbox.update(Lightbox::prev)>
                    "‹"
                </button>
                <img
                    id="lightboxImg"
                    src=move || shown().map(|image| image.src)
                    alt=move || shown().map(|image| image.alt_text().to_string())
                />
                <button type="button" class="next" on:click=move |_| lightbox.update(Lightbox::next)>
                    "›"
                </button>
            </div>
        </section>
    }
}
