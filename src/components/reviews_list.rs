use chrono::Local;
use leptos::logging::{error, log};
use leptos::*;

use crate::client::{ApiClient, ApiFailure};
use crate::content::{fallback_reviews, GOOGLE_REVIEW_URL, REVIEW_STATS, TRIPADVISOR_URL};
use crate::models::review::{average_rating, star_counts, Review};
use crate::utils::carousel::{next_index, prev_index};
use crate::utils::dates::{format_short, relative};

/// Row of five stars: `rating` filled, the rest empty.
#[component]
pub fn StarRating(#[prop(into)] rating: MaybeSignal<u8>) -> impl IntoView {
    view! {
        <span class="stars" aria-label=move || format!("{} sur 5", rating.get())>
            {move || {
                let (filled, empty) = star_counts(rating.get());
                (0..filled)
                    .map(|_| view! { <span class="star filled">"★"</span> })
                    .chain((0..empty).map(|_| view! { <span class="star empty">"☆"</span> }))
                    .collect_view()
            }}
        </span>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let when = relative(review.created_at, Local::now().naive_local());
    let posted_on = format_short(review.created_at.date());
    view! {
        <article class="review-card">
            <StarRating rating=review.rating/>
            <p class="review-comment">{format!("« {} »", review.comment)}</p>
            <div class="review-meta">
                <span class="review-author">{review.name}</span>
                <span class="review-date" title=posted_on>{when}</span>
            </div>
        </article>
    }
}

/// Customer reviews: average score, a carousel and the full grid.
#[component]
pub fn Reviews() -> impl IntoView {
    let reviews = create_rw_signal(Vec::<Review>::new());
    let (loading, set_loading) = create_signal(true);
    let (current, set_current) = create_signal(0usize);

    create_effect(move |_| {
        spawn_local(async move {
            match ApiClient::browser().reviews(true).await {
                Ok(list) => {
                    log!("[REVIEWS] {} avis chargés", list.len());
                    reviews.set(list);
                }
                Err(err) => {
                    let failure = ApiFailure::from(err);
                    error!(
                        "[REVIEWS] Erreur lors du chargement des avis ({}): {}",
                        failure.status, failure.message
                    );
                    reviews.set(fallback_reviews());
                }
            }
            set_current.set(0);
            set_loading.set(false);
        });
    });

    let count = move || reviews.with(Vec::len);
    let average = move || reviews.with(|list| average_rating(list));
    let previous = move |_: ev::MouseEvent| set_current.update(|i| *i = prev_index(*i, count()));
    let next = move |_: ev::MouseEvent| set_current.update(|i| *i = next_index(*i, count()));

    view! {
        <section id="avis" class="reviews">
            <div class="container">
                <h2 class="section-title">"Avis clients"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="loading">"Chargement des avis..."</p> }
                >
                    <div class="reviews-summary">
                        <span class="average">{move || format!("{:.1}", average())}</span>
                        <StarRating rating=Signal::derive(move || average().round() as u8)/>
                        <span class="count">
                            {move || format!("Basé sur {} avis", count())}
                        </span>
                    </div>
                    <div class="reviews-stats">
                        {REVIEW_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <span class="stat-value">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || { count() > 0 }>
                        <div class="carousel">
                            <button class="carousel-nav" aria-label="Avis précédent" on:click=previous>
                                "‹"
                            </button>
                            {move || {
                                reviews
                                    .with(|list| list.get(current.get()).cloned())
                                    .map(|review| view! { <ReviewCard review=review/> })
                            }}
                            <button class="carousel-nav" aria-label="Avis suivant" on:click=next>
                                "›"
                            </button>
                        </div>
                        <div class="carousel-dots">
                            {move || {
                                (0..count())
                                    .map(|index| {
                                        view! {
                                            <button
                                                class="dot"
                                                class:active=move || current.get() == index
                                                aria-label=format!("Avis {}", index + 1)
                                                on:click=move |_| set_current.set(index)
                                            ></button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>

                    <div class="reviews-grid">
                        <For
                            each=move || reviews.get()
                            key=|review| review.id.clone()
                            children=|review| view! { <ReviewCard review=review/> }
                        />
                    </div>
                </Show>

                <div class="reviews-cta">
                    <p>"Vous êtes venus chez nous ? Partagez votre expérience !"</p>
                    <a class="btn btn-outline" href=GOOGLE_REVIEW_URL target="_blank" rel="noopener">
                        "Laisser un avis sur Google"
                    </a>
                    <a class="btn btn-outline" href=TRIPADVISOR_URL target="_blank" rel="noopener">
                        "Voir sur TripAdvisor"
                    </a>
                </div>
            </div>
        </section>
    }
}
