use chrono::Local;
use gloo_timers::callback::Timeout;
use leptos::logging::{error, log};
use leptos::*;

use crate::app::use_restaurant_info;
use crate::client::{ApiClient, ApiFailure};
use crate::content::RESERVATION_TIPS;
use crate::models::ReservationRequest;
use crate::utils::dates::format_long;
use crate::validation::{
    dinner_slots, guest_label, lunch_slots, parse_date, Field, FieldErrors, ReservationForm,
    DATE_FORMAT, GUEST_OPTIONS,
};

/// How long the confirmation stays up before the form comes back empty.
const RESET_DELAY_MS: u32 = 5_000;

/// Inline message under a field, present only while that field is invalid.
fn field_error(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(&field).copied())
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
pub fn Reservation() -> impl IntoView {
    let info = use_restaurant_info();
    let form = create_rw_signal(ReservationForm::default());
    let errors = create_rw_signal(FieldErrors::new());
    let (submitting, set_submitting) = create_signal(false);
    let (api_error, set_api_error) = create_signal(None::<String>);
    let (confirmed, set_confirmed) = create_signal(None::<ReservationRequest>);

    let value = move |field: Field| move || form.with(|f| f.get(field).to_string());

    // Editing a field clears its error.
    let on_input = move |field: Field| {
        move |ev: ev::Event| {
            let input = event_target_value(&ev);
            form.update(|f| f.set(field, input));
            errors.update(|e| {
                e.remove(&field);
            });
        }
    };

    let has_error = move |field: Field| move || errors.with(|e| e.contains_key(&field));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let found = form.with(|f| f.validate(Local::now().date_naive()));
        if !found.is_empty() {
            log!("[RESERVATION] {} champ(s) invalide(s)", found.len());
            errors.set(found);
            return;
        }

        let request = form.with(ReservationForm::to_request);
        set_submitting.set(true);
        set_api_error.set(None);
        spawn_local(async move {
            match ApiClient::browser().create_reservation(&request).await {
                Ok(response) => {
                    log!("[RESERVATION] {}", response.message);
                    set_confirmed.set(Some(request));
                    Timeout::new(RESET_DELAY_MS, move || {
                        set_confirmed.set(None);
                        form.set(ReservationForm::default());
                        errors.set(FieldErrors::new());
                    })
                    .forget();
                }
                Err(err) => {
                    let failure = ApiFailure::from(err);
                    error!(
                        "[RESERVATION] Échec de la réservation ({}): {}",
                        failure.status, failure.message
                    );
                    set_api_error.set(Some(failure.message));
                }
            }
            set_submitting.set(false);
        });
    };

    let today = Local::now().date_naive().format(DATE_FORMAT).to_string();

    let form_view = move || {
        let today = today.clone();
        view! {
            <form class="reservation-form" novalidate=true on:submit=on_submit>
                <div class="form-row">
                    <label>
                        "Date *"
                        <input
                            type="date"
                            min=today
                            class:invalid=has_error(Field::Date)
                            prop:value=value(Field::Date)
                            on:input=on_input(Field::Date)
                        />
                        {field_error(errors, Field::Date)}
                    </label>
                    <label>
                        "Heure *"
                        <select
                            class:invalid=has_error(Field::Time)
                            prop:value=value(Field::Time)
                            on:change=on_input(Field::Time)
                        >
                            <option value="">"Choisir un horaire"</option>
                            <optgroup label="Déjeuner">
                                {lunch_slots()
                                    .map(|slot| view! { <option value=slot>{slot}</option> })
                                    .collect_view()}
                            </optgroup>
                            <optgroup label="Dîner">
                                {dinner_slots()
                                    .map(|slot| view! { <option value=slot>{slot}</option> })
                                    .collect_view()}
                            </optgroup>
                        </select>
                        {field_error(errors, Field::Time)}
                    </label>
                    <label>
                        "Nombre de personnes"
                        <select prop:value=value(Field::Guests) on:change=on_input(Field::Guests)>
                            {GUEST_OPTIONS
                                .iter()
                                .map(|option| {
                                    view! { <option value=*option>{guest_label(option)}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <div class="form-row">
                    <label>
                        "Prénom *"
                        <input
                            type="text"
                            class:invalid=has_error(Field::FirstName)
                            prop:value=value(Field::FirstName)
                            on:input=on_input(Field::FirstName)
                        />
                        {field_error(errors, Field::FirstName)}
                    </label>
                    <label>
                        "Nom *"
                        <input
                            type="text"
                            class:invalid=has_error(Field::LastName)
                            prop:value=value(Field::LastName)
                            on:input=on_input(Field::LastName)
                        />
                        {field_error(errors, Field::LastName)}
                    </label>
                </div>
                <div class="form-row">
                    <label>
                        "Téléphone *"
                        <input
                            type="tel"
                            class:invalid=has_error(Field::Phone)
                            prop:value=value(Field::Phone)
                            on:input=on_input(Field::Phone)
                        />
                        {field_error(errors, Field::Phone)}
                    </label>
                    <label>
                        "Email *"
                        <input
                            type="email"
                            class:invalid=has_error(Field::Email)
                            prop:value=value(Field::Email)
                            on:input=on_input(Field::Email)
                        />
                        {field_error(errors, Field::Email)}
                    </label>
                </div>
                <label>
                    "Message (optionnel)"
                    <textarea
                        rows=3
                        placeholder="Allergies, occasion spéciale, demande particulière..."
                        prop:value=value(Field::Message)
                        on:input=on_input(Field::Message)
                    ></textarea>
                </label>
                {move || api_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Envoi en cours..." } else { "Confirmer la réservation" }}
                </button>
            </form>
        }
    };

    let confirmation = move |request: ReservationRequest| {
        let when = parse_date(&request.date)
            .map(format_long)
            .unwrap_or_else(|| request.date.clone());
        view! {
            <div class="reservation-confirmed">
                <h3>"Réservation confirmée !"</h3>
                <p>{format!("Merci {} !", request.first_name)}</p>
                <p>
                    {format!(
                        "Votre table pour {} est réservée le {} à {}.",
                        guest_label(&request.guests),
                        when,
                        request.time
                    )}
                </p>
                <p>
                    "Pour toute modification, appelez-nous au "
                    <a href=move || info.with(|i| i.phone_href())>
                        {move || info.with(|i| i.phone.clone())}
                    </a>
                </p>
            </div>
        }
    };

    view! {
        <section id="reservation" class="reservation">
            <div class="container reservation-grid">
                <div class="reservation-main">
                    <h2 class="section-title">"Réserver une table"</h2>
                    {move || match confirmed.get() {
                        Some(request) => confirmation(request).into_view(),
                        None => form_view().into_view(),
                    }}
                </div>
                <aside class="reservation-sidebar">
                    <div class="info-card">
                        <h3>"Réservation par téléphone"</h3>
                        <a class="phone-link" href=move || info.with(|i| i.phone_href())>
                            {move || info.with(|i| i.phone.clone())}
                        </a>
                    </div>
                    <div class="info-card">
                        <h3>"Horaires"</h3>
                        <ul>
                            {move || {
                                info.with(|i| {
                                    i.opening_hours
                                        .days()
                                        .into_iter()
                                        .map(|(day, hours)| {
                                            let line = format!("{day} : {hours}");
                                            view! { <li>{line}</li> }
                                        })
                                        .collect_view()
                                })
                            }}
                        </ul>
                    </div>
                    <div class="info-card">
                        <h3>"Bon à savoir"</h3>
                        <ul>
                            {RESERVATION_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                        </ul>
                    </div>
                </aside>
            </div>
        </section>
    }
}
