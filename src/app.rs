//! Root of the site: document head, router and the single home page that
//! stacks every section in order.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use leptos::logging::{log, warn};

use crate::client::{ApiClient, ApiFailure};
use crate::components::{
    about::About, footer::Footer, gallery::Gallery, header::Header, hero::Hero, menu::Menu,
    practical_info::PracticalInfo, reservation::Reservation, reviews_list::Reviews,
};
use crate::models::RestaurantInfo;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/comptoir.css"/>
        <Title text="Café Comptoir - Restaurant à Montbrison"/>
        <Meta
            name="description"
            content="Cuisine française traditionnelle, produits frais et locaux, au cœur de Montbrison."
        />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Restaurant details shared by the header, practical info, reservation
/// and footer. Starts from the built-in record and is replaced by
/// `GET /api/info` once it answers.
pub fn use_restaurant_info() -> RwSignal<RestaurantInfo> {
    use_context::<RwSignal<RestaurantInfo>>()
        .unwrap_or_else(|| create_rw_signal(RestaurantInfo::default()))
}

#[component]
fn HomePage() -> impl IntoView {
    let info = create_rw_signal(RestaurantInfo::default());
    provide_context(info);

    // Effects only run in the browser, so the fetch never fires during SSR.
    create_effect(move |_| {
        spawn_local(async move {
            match ApiClient::browser().restaurant_info().await {
                Ok(fetched) => {
                    log!("[INFO] Restaurant info loaded from API");
                    info.set(fetched);
                }
                Err(err) => {
                    let failure = ApiFailure::from(err);
                    warn!(
                        "[INFO] Using built-in restaurant info ({}: {})",
                        failure.status, failure.message
                    );
                }
            }
        });
    });

    view! {
        <div class="site">
            <Header/>
            <Hero/>
            <About/>
            <Menu/>
            <Gallery/>
            <PracticalInfo/>
            <Reviews/>
            <Reservation/>
            <Footer/>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found container">
            <h1>"Page introuvable"</h1>
            <A href="/">"Retour à l'accueil"</A>
        </section>
    }
}
