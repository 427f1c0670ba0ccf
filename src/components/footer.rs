use leptos::*;

use crate::app::use_restaurant_info;
use crate::content::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    let info = use_restaurant_info();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3>{move || info.with(|i| i.name.clone())}</h3>
                    <p>{move || info.with(|i| i.slogan.clone())}</p>
                </div>
                <nav>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <a href=format!("#{}", item.id)>{item.label}</a> })
                        .collect_view()}
                </nav>
                <div>
                    <p>{move || info.with(|i| i.address.clone())}</p>
                    <p>{move || info.with(|i| i.phone.clone())}</p>
                    <p>{move || info.with(|i| format!("Instagram {}", i.social_media.instagram))}</p>
                    <p>{move || info.with(|i| format!("Facebook {}", i.social_media.facebook))}</p>
                </div>
            </div>
            <p class="copyright">
                {move || info.with(|i| format!("© {} - Tous droits réservés", i.name))}
            </p>
        </footer>
    }
}
