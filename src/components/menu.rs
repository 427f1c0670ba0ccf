use leptos::logging::{error, log};
use leptos::*;

use crate::client::{ApiClient, ApiFailure};
use crate::content::{fallback_menu, MENU_DU_JOUR};
use crate::models::menu_item::{categories, category_label, filter_by_category};
use crate::models::{CategoryFilter, MenuItem};

/// Menu section: the fixed menu du jour and the à la carte dishes loaded
/// from `/api/menu/`, filterable by category.
///
/// On a failed fetch the built-in dishes are shown instead so the section
/// never stays empty.
#[component]
pub fn Menu() -> impl IntoView {
    let items = create_rw_signal(Vec::<MenuItem>::new());
    let category_list = create_rw_signal(Vec::<String>::new());
    let (loading, set_loading) = create_signal(true);
    let (filter, set_filter) = create_signal(CategoryFilter::All);

    create_effect(move |_| {
        spawn_local(async move {
            let client = ApiClient::browser();
            let (fetched, fetched_categories) =
                futures::join!(client.menu_items(None, true), client.menu_categories());
            match fetched {
                Ok(list) => {
                    log!("[MENU] {} plats chargés", list.len());
                    let derived = fetched_categories.unwrap_or_else(|_| categories(&list));
                    category_list.set(derived);
                    items.set(list);
                }
                Err(err) => {
                    let failure = ApiFailure::from(err);
                    error!(
                        "[MENU] Erreur lors du chargement du menu ({}): {}",
                        failure.status, failure.message
                    );
                    let fallback = fallback_menu();
                    category_list.set(categories(&fallback));
                    items.set(fallback);
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || items.with(|list| filter.with(|f| filter_by_category(list, f)));

    let tab = move |label: String, value: CategoryFilter| {
        let selected = value.clone();
        view! {
            <button
                class="menu-tab"
                class:active=move || filter.with(|f| *f == selected)
                on:click=move |_| set_filter.set(value.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="menu" class="menu">
            <div class="container">
                <h2 class="section-title">"Notre carte"</h2>
                <p class="section-subtitle">
                    "Une cuisine française traditionnelle, préparée chaque jour avec des produits frais."
                </p>

                <div class="menu-du-jour">
                    <h3>"Menu du jour"</h3>
                    <dl>
                        <dt>"Entrée"</dt>
                        <dd>{MENU_DU_JOUR.starter}</dd>
                        <dt>"Plat"</dt>
                        <dd>{MENU_DU_JOUR.main}</dd>
                        <dt>"Dessert"</dt>
                        <dd>{MENU_DU_JOUR.dessert}</dd>
                    </dl>
                    <p class="menu-du-jour-price">{MENU_DU_JOUR.price}</p>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="loading">"Chargement du menu..."</p> }
                >
                    <div class="menu-tabs">
                        {tab("Tous les plats".to_string(), CategoryFilter::All)}
                        {move || {
                            category_list
                                .get()
                                .into_iter()
                                .map(|category| {
                                    let label = category_label(&category).to_string();
                                    tab(label, CategoryFilter::Category(category))
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="menu-grid">
                        <For
                            each=visible
                            key=|item| item.id.clone()
                            children=|item| {
                                view! {
                                    <article class="menu-card">
                                        {item
                                            .image_url
                                            .clone()
                                            .map(|src| view! { <img src=src alt=item.name.clone()/> })}
                                        <div class="menu-card-head">
                                            <h4>{item.name.clone()}</h4>
                                            <span class="price">{item.price.clone()}</span>
                                        </div>
                                        <p>{item.description.clone()}</p>
                                        <span class="badge">{category_label(&item.category).to_string()}</span>
                                    </article>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}
