use leptos::*;

use crate::content::GALLERY_IMAGES;
use crate::utils::carousel::{next_index, prev_index};

/// Photo grid; clicking a photo opens it full size with previous/next
/// arrows that wrap around the set.
#[component]
pub fn Gallery() -> impl IntoView {
    let (opened, set_opened) = create_signal(None::<usize>);
    let count = GALLERY_IMAGES.len();

    let step = move |forward: bool| {
        set_opened.update(|current| {
            if let Some(index) = current {
                *index = if forward {
                    next_index(*index, count)
                } else {
                    prev_index(*index, count)
                };
            }
        })
    };

    view! {
        <section id="galerie" class="gallery">
            <div class="container">
                <h2 class="section-title">"Galerie"</h2>
                <p class="section-subtitle">
                    "Découvrez l'atmosphère chaleureuse de notre restaurant et nos délicieuses spécialités."
                </p>
                <div class="gallery-grid">
                    {GALLERY_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(index, image)| {
                            view! {
                                <figure class="gallery-item" on:click=move |_| set_opened.set(Some(index))>
                                    <img src=image.url alt=image.alt loading="lazy"/>
                                    <figcaption>{image.caption}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                opened
                    .get()
                    .and_then(|index| GALLERY_IMAGES.get(index).copied())
                    .map(|image| {
                        view! {
                            <div class="lightbox" on:click=move |_| set_opened.set(None)>
                                <button
                                    class="lightbox-nav prev"
                                    aria-label="Photo précédente"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        step(false);
                                    }
                                >
                                    "‹"
                                </button>
                                <figure on:click=|ev| ev.stop_propagation()>
                                    <img src=image.url alt=image.alt/>
                                    <figcaption>{image.caption}</figcaption>
                                </figure>
                                <button
                                    class="lightbox-nav next"
                                    aria-label="Photo suivante"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        step(true);
                                    }
                                >
                                    "›"
                                </button>
                                <button class="lightbox-close" aria-label="Fermer">"✕"</button>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
