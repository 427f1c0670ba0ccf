use leptos::*;

use crate::app::use_restaurant_info;
use crate::content::NAV_ITEMS;
use crate::utils::dom::scroll_to_section;

/// Sticky top bar with the section anchors, the phone link and a
/// collapsible menu on small screens.
#[component]
pub fn Header() -> impl IntoView {
    let info = use_restaurant_info();
    let (menu_open, set_menu_open) = create_signal(false);

    let go_to = move |section: &'static str| {
        set_menu_open.set(false);
        scroll_to_section(section);
    };

    let nav_links = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let section = item.id;
                view! {
                    <button class=class on:click=move |_| go_to(section)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="container header-bar">
                <button class="brand" on:click=move |_| go_to("accueil")>
                    {move || info.with(|i| i.name.clone())}
                </button>
                <nav class="nav-desktop">{nav_links("nav-link")}</nav>
                <div class="header-actions">
                    <a class="phone-link" href=move || info.with(|i| i.phone_href())>
                        {move || info.with(|i| i.phone.clone())}
                    </a>
                    <button class="btn btn-primary" on:click=move |_| go_to("reservation")>
                        "Réserver"
                    </button>
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Ouvrir le menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">
                    {nav_links("nav-link nav-link-mobile")}
                    <button class="btn btn-primary" on:click=move |_| go_to("reservation")>
                        "Réserver une table"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
