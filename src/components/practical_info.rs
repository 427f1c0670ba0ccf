use leptos::*;

use crate::app::use_restaurant_info;

#[component]
pub fn PracticalInfo() -> impl IntoView {
    let info = use_restaurant_info();

    view! {
        <section id="infos" class="practical-info">
            <div class="container">
                <h2 class="section-title">"Infos pratiques"</h2>
                <div class="info-grid">
                    <div class="info-card">
                        <h3>"Adresse"</h3>
                        <p>{move || info.with(|i| i.address.clone())}</p>
                        <h3>"Téléphone"</h3>
                        <a href=move || info.with(|i| i.phone_href())>
                            {move || info.with(|i| i.phone.clone())}
                        </a>
                        <h3>"Email"</h3>
                        <a href=move || info.with(|i| format!("mailto:{}", i.email))>
                            {move || info.with(|i| i.email.clone())}
                        </a>
                    </div>
                    <div class="info-card">
                        <h3>"Horaires d'ouverture"</h3>
                        <table class="opening-hours">
                            <tbody>
                                {move || {
                                    info.with(|i| {
                                        i.opening_hours
                                            .days()
                                            .into_iter()
                                            .map(|(day, hours)| {
                                                let closed = hours == "Fermé";
                                                let hours = hours.to_string();
                                                view! {
                                                    <tr class:closed=closed>
                                                        <th>{day}</th>
                                                        <td>{hours}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </tbody>
                        </table>
                        <p class="closure-notice">{move || info.with(|i| i.closure_info.clone())}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
