use leptos::*;

use crate::app::use_restaurant_info;
use crate::content::HERO_IMAGE;
use crate::utils::dom::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let info = use_restaurant_info();

    view! {
        <section id="accueil" class="hero">
            <div class="container hero-grid">
                <div class="hero-text">
                    <p class="hero-kicker">"Restaurant traditionnel à Montbrison"</p>
                    <h1>{move || info.with(|i| i.name.clone())}</h1>
                    <p class="hero-slogan">{move || info.with(|i| i.slogan.clone())}</p>
                    <p>
                        "Cuisine française faite maison, produits frais du terroir forézien "
                        "et accueil chaleureux, midi et soir."
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" on:click=move |_| scroll_to_section("reservation")>
                            "Réserver une table"
                        </button>
                        <button class="btn btn-outline" on:click=move |_| scroll_to_section("menu")>
                            "Découvrir la carte"
                        </button>
                    </div>
                </div>
                <img class="hero-image" src=HERO_IMAGE alt="Salle du Café Comptoir"/>
            </div>
        </section>
    }
}
