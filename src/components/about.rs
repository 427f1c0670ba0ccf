use leptos::*;

use crate::content::{ABOUT_IMAGE, ABOUT_PARAGRAPHS, ABOUT_TITLE, FEATURES, QUALITY_COMMITMENTS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="a-propos" class="about">
            <div class="container">
                <h2 class="section-title">{ABOUT_TITLE}</h2>
                <div class="about-grid">
                    <div class="about-text">
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <div class="about-side">
                        <img src=ABOUT_IMAGE alt="L'équipe du Café Comptoir"/>
                        <div class="quality-card">
                            <h3>"Notre engagement qualité"</h3>
                            <ul>
                                {QUALITY_COMMITMENTS
                                    .iter()
                                    .map(|c| view! { <li>{*c}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
                <div class="features">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <span class="feature-icon">{feature.icon}</span>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
