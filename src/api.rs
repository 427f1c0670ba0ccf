use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Local, NaiveDate, Utc};
use leptos::logging::log;
use serde::{Deserialize, Deserializer};
use serde_json::json;
use uuid::Uuid;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::{
    ContactMessage, ContactRequest, ContactStatus, NewMenuItem, NewReview, Reservation,
    ReservationRequest, ReservationStatus, RestaurantInfo, SuccessResponse,
};
use crate::validation::{is_valid_email, DATE_FORMAT};

type ApiResult = Result<HttpResponse, ApiError>;

fn yes() -> bool {
    true
}

/// Reads a boolean query flag the way form-encoded clients send it:
/// `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, in any case.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "valeur booléenne invalide: {other}"
        ))),
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    #[serde(default = "yes", deserialize_with = "lenient_bool")]
    pub available_only: bool,
}

#[derive(Deserialize)]
pub struct ReviewsQuery {
    #[serde(default = "yes", deserialize_with = "lenient_bool")]
    pub approved_only: bool,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

#[derive(Deserialize)]
pub struct ApproveQuery {
    #[serde(default = "yes", deserialize_with = "lenient_bool")]
    pub approved: bool,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    #[serde(deserialize_with = "lenient_bool")]
    pub available: bool,
}

/// Malformed JSON bodies answer 422 with a `detail` message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let detail = err.to_string();
        log!("[API] Rejected request body: {}", detail);
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
        )
        .into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
        )
        .into()
    })
}

/// Mounts every `/api` route. Collection routes answer with and without
/// the trailing slash.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .service(web::resource(["", "/"]).route(web::get().to(root)))
                .route("/info", web::get().to(restaurant_info))
                .service(
                    web::scope("/reservations")
                        .service(
                            web::resource(["", "/"])
                                .route(web::get().to(list_reservations))
                                .route(web::post().to(create_reservation)),
                        )
                        .route("/{id}", web::get().to(get_reservation))
                        .route("/{id}/status", web::patch().to(update_reservation_status)),
                )
                .service(
                    web::scope("/contact")
                        .service(
                            web::resource(["", "/"])
                                .route(web::get().to(list_contacts))
                                .route(web::post().to(send_contact)),
                        )
                        .route("/{id}", web::get().to(get_contact))
                        .route("/{id}/status", web::patch().to(update_contact_status)),
                )
                .service(
                    web::scope("/reviews")
                        .service(
                            web::resource(["", "/"])
                                .route(web::get().to(list_reviews))
                                .route(web::post().to(create_review)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(get_review))
                                .route(web::delete().to(delete_review)),
                        )
                        .route("/{id}/approve", web::patch().to(approve_review)),
                )
                .service(
                    web::scope("/menu")
                        .service(
                            web::resource(["", "/"])
                                .route(web::get().to(list_menu))
                                .route(web::post().to(create_menu_item)),
                        )
                        .route("/categories", web::get().to(menu_categories))
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(get_menu_item))
                                .route(web::put().to(update_menu_item))
                                .route(web::delete().to(delete_menu_item)),
                        )
                        .route("/{id}/availability", web::patch().to(update_menu_availability)),
                ),
        );
}

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "API Café Comptoir - Montbrison",
        "restaurant": "Café Comptoir",
        "location": "Montbrison, France",
        "status": "operational"
    }))
}

pub async fn restaurant_info() -> HttpResponse {
    HttpResponse::Ok().json(RestaurantInfo::default())
}

// Reservations

pub async fn create_reservation(
    db: web::Data<Database>,
    request: web::Json<ReservationRequest>,
) -> ApiResult {
    let request = request.into_inner();
    let date = NaiveDate::parse_from_str(&request.date, DATE_FORMAT).map_err(|_| {
        ApiError::BadRequest("Format de date invalide. Utilisez YYYY-MM-DD".to_string())
    })?;
    if date < Local::now().date_naive() {
        return Err(ApiError::BadRequest(
            "La date de réservation ne peut pas être dans le passé".to_string(),
        ));
    }
    if !is_valid_email(&request.email) {
        return Err(ApiError::Unprocessable("Format d'email invalide".to_string()));
    }

    let reservation = Reservation {
        id: new_id(),
        request,
        status: ReservationStatus::Pending,
        created_at: Utc::now().naive_utc(),
    };
    db.insert_reservation(&reservation).await?;
    log!(
        "[API] New reservation {} for {} on {} at {}",
        reservation.id,
        reservation.full_name(),
        reservation.request.date,
        reservation.request.time
    );

    Ok(HttpResponse::Ok().json(SuccessResponse::with_data(
        "Réservation confirmée avec succès ! Nous vous contacterons pour confirmer.",
        json!({
            "reservation_id": reservation.id,
            "date": reservation.request.date,
            "time": reservation.request.time,
            "guests": reservation.request.guests,
            "name": reservation.full_name(),
        }),
    )))
}

pub async fn list_reservations(db: web::Data<Database>) -> ApiResult {
    let reservations = db.list_reservations().await?;
    Ok(HttpResponse::Ok().json(reservations))
}

pub async fn get_reservation(db: web::Data<Database>, id: web::Path<String>) -> ApiResult {
    match db.get_reservation(&id).await? {
        Some(reservation) => Ok(HttpResponse::Ok().json(reservation)),
        None => Err(ApiError::NotFound("Réservation non trouvée")),
    }
}

pub async fn update_reservation_status(
    db: web::Data<Database>,
    id: web::Path<String>,
    query: web::Query<StatusQuery>,
) -> ApiResult {
    let status: ReservationStatus = query.status.parse()?;
    if !db.set_reservation_status(&id, status).await? {
        return Err(ApiError::NotFound("Réservation non trouvée"));
    }
    log!("[API] Reservation {} marked {}", id, status);
    Ok(HttpResponse::Ok().json(SuccessResponse::new(format!(
        "Statut de la réservation mis à jour: {status}"
    ))))
}

// Contact

pub async fn send_contact(
    db: web::Data<Database>,
    request: web::Json<ContactRequest>,
) -> ApiResult {
    let request = request.into_inner();
    if !is_valid_email(&request.email) {
        return Err(ApiError::Unprocessable("Format d'email invalide".to_string()));
    }

    let message = ContactMessage {
        id: new_id(),
        request,
        status: ContactStatus::New,
        created_at: Utc::now().naive_utc(),
    };
    db.insert_contact(&message).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::with_data(
        "Votre message a été envoyé avec succès ! Nous vous recontacterons rapidement.",
        json!({
            "contact_id": message.id,
            "name": message.request.name,
            "subject": message.request.subject,
        }),
    )))
}

pub async fn list_contacts(db: web::Data<Database>) -> ApiResult {
    Ok(HttpResponse::Ok().json(db.list_contacts().await?))
}

pub async fn get_contact(db: web::Data<Database>, id: web::Path<String>) -> ApiResult {
    db.get_contact(&id)
        .await?
        .map(|message| HttpResponse::Ok().json(message))
        .ok_or(ApiError::NotFound("Message de contact non trouvé"))
}

pub async fn update_contact_status(
    db: web::Data<Database>,
    id: web::Path<String>,
    query: web::Query<StatusQuery>,
) -> ApiResult {
    let status: ContactStatus = query.status.parse()?;
    if !db.set_contact_status(&id, status).await? {
        return Err(ApiError::NotFound("Message de contact non trouvé"));
    }
    Ok(HttpResponse::Ok().json(SuccessResponse::new(format!(
        "Statut du message mis à jour: {status}"
    ))))
}

// Reviews

pub async fn list_reviews(db: web::Data<Database>, query: web::Query<ReviewsQuery>) -> ApiResult {
    let reviews = db.list_reviews(query.approved_only).await?;
    log!("[API] Returning {} reviews", reviews.len());
    Ok(HttpResponse::Ok().json(reviews))
}

pub async fn create_review(db: web::Data<Database>, request: web::Json<NewReview>) -> ApiResult {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|reason| ApiError::Unprocessable(reason.to_string()))?;

    let review = request.into_review(new_id(), Utc::now().naive_utc());
    db.insert_review(&review).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::with_data(
        "Votre avis a été publié avec succès ! Merci pour votre retour.",
        json!({
            "review_id": review.id,
            "name": review.name,
            "rating": review.rating,
        }),
    )))
}

pub async fn get_review(db: web::Data<Database>, id: web::Path<String>) -> ApiResult {
    db.get_review(&id)
        .await?
        .map(|review| HttpResponse::Ok().json(review))
        .ok_or(ApiError::NotFound("Avis non trouvé"))
}

pub async fn approve_review(
    db: web::Data<Database>,
    id: web::Path<String>,
    query: web::Query<ApproveQuery>,
) -> ApiResult {
    if !db.set_review_approval(&id, query.approved).await? {
        return Err(ApiError::NotFound("Avis non trouvé"));
    }
    let status = if query.approved { "approuvé" } else { "rejeté" };
    Ok(HttpResponse::Ok().json(SuccessResponse::new(format!("Avis {status} avec succès"))))
}

pub async fn delete_review(db: web::Data<Database>, id: web::Path<String>) -> ApiResult {
    if !db.delete_review(&id).await? {
        return Err(ApiError::NotFound("Avis non trouvé"));
    }
    Ok(HttpResponse::Ok().json(SuccessResponse::new("Avis supprimé avec succès")))
}

// Menu

pub async fn list_menu(db: web::Data<Database>, query: web::Query<MenuQuery>) -> ApiResult {
    // An empty `category=` means no filter.
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let items = db.list_menu_items(category, query.available_only).await?;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn menu_categories(db: web::Data<Database>) -> ApiResult {
    let categories = db.menu_categories().await?;
    Ok(HttpResponse::Ok().json(json!({ "categories": categories })))
}

pub async fn get_menu_item(db: web::Data<Database>, id: web::Path<String>) -> ApiResult {
    db.get_menu_item(&id)
        .await?
        .map(|item| HttpResponse::Ok().json(item))
        .ok_or(ApiError::NotFound("Élément du menu non trouvé"))
}

pub async fn create_menu_item(
    db: web::Data<Database>,
    request: web::Json<NewMenuItem>,
) -> ApiResult {
    let item = request.into_inner().into_item(new_id());
    db.insert_menu_item(&item).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::with_data(
        "Élément du menu créé avec succès",
        json!({
            "item_id": item.id,
            "name": item.name,
            "category": item.category,
        }),
    )))
}

pub async fn update_menu_item(
    db: web::Data<Database>,
    id: web::Path<String>,
    request: web::Json<NewMenuItem>,
) -> ApiResult {
    if !db.update_menu_item(&id, &request).await? {
        return Err(ApiError::NotFound("Élément du menu non trouvé"));
    }
    Ok(HttpResponse::Ok().json(SuccessResponse::new("Élément du menu mis à jour avec succès")))
}

pub async fn update_menu_availability(
    db: web::Data<Database>,
    id: web::Path<String>,
    query: web::Query<AvailabilityQuery>,
) -> ApiResult {
    if !db.set_menu_item_availability(&id, query.available).await? {
        return Err(ApiError::NotFound("Élément du menu non trouvé"));
    }
    let status = if query.available { "disponible" } else { "indisponible" };
    Ok(HttpResponse::Ok().json(SuccessResponse::new(format!(
        "Élément du menu marqué comme {status}"
    ))))
}

pub async fn delete_menu_item(db: web::Data<Database>, id: web::Path<String>) -> ApiResult {
    if !db.delete_menu_item(&id).await? {
        return Err(ApiError::NotFound("Élément du menu non trouvé"));
    }
    log!("[API] Menu item {} deleted", id);
    Ok(HttpResponse::Ok().json(SuccessResponse::new("Élément du menu supprimé avec succès")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::Duration;
    use serde_json::Value;

    async fn seeded_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.create_schema().await.unwrap();
        db.seed_defaults().await.unwrap();
        db
    }

    macro_rules! init_app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($db))
                    .configure(configure),
            )
            .await
        };
    }

    fn reservation_body(date: NaiveDate, email: &str) -> Value {
        json!({
            "date": date.format(DATE_FORMAT).to_string(),
            "time": "19:30",
            "guests": "4",
            "firstName": "Claire",
            "lastName": "Martin",
            "phone": "0477000000",
            "email": email,
            "message": ""
        })
    }

    #[actix_web::test]
    async fn banner_answers_with_and_without_slash() {
        let app = init_app!(seeded_db().await);
        for uri in ["/api", "/api/"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[actix_web::test]
    async fn info_returns_the_restaurant_record() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::get().uri("/api/info").to_request();
        let info: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info["name"], "Café Comptoir");
        assert!(info["openingHours"]["monday"].is_string());
    }

    #[actix_web::test]
    async fn reservation_is_stored_as_pending() {
        let db = seeded_db().await;
        let app = init_app!(db.clone());
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let req = test::TestRequest::post()
            .uri("/api/reservations/")
            .set_json(reservation_body(tomorrow, "claire@example.fr"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Claire Martin");
        let id = body["data"]["reservation_id"].as_str().unwrap();
        let stored = db.get_reservation(id).await.unwrap().unwrap();
        assert_eq!(stored.status, ReservationStatus::Pending);
    }

    #[actix_web::test]
    async fn reservation_in_the_past_is_rejected() {
        let app = init_app!(seeded_db().await);
        let yesterday = Local::now().date_naive() - Duration::days(1);
        let req = test::TestRequest::post()
            .uri("/api/reservations/")
            .set_json(reservation_body(yesterday, "claire@example.fr"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "La date de réservation ne peut pas être dans le passé");
    }

    #[actix_web::test]
    async fn reservation_with_bad_date_or_email_is_rejected() {
        let app = init_app!(seeded_db().await);
        let mut body = reservation_body(Local::now().date_naive(), "claire@example.fr");
        body["date"] = json!("24/10/2026");
        let req = test::TestRequest::post()
            .uri("/api/reservations/")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/reservations/")
            .set_json(reservation_body(Local::now().date_naive(), "claire@example"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        let app = init_app!(seeded_db().await);
        for uri in [
            "/api/reservations/nope",
            "/api/contact/nope",
            "/api/reviews/nope",
            "/api/menu/nope",
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn unknown_status_is_a_bad_request() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::patch()
            .uri("/api/reservations/any/status?status=lost")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn review_rating_out_of_range_is_unprocessable() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::post()
            .uri("/api/reviews/")
            .set_json(json!({ "name": "Léa", "rating": 6, "comment": "Super" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn unapproved_reviews_only_listed_on_request() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::patch()
            .uri("/api/reviews/1/approve?approved=false")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/reviews/").to_request();
        let approved: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(approved.len(), 3);

        let req = test::TestRequest::get()
            .uri("/api/reviews/?approved_only=false")
            .to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 4);
    }

    #[actix_web::test]
    async fn categories_are_distinct() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::post()
            .uri("/api/menu")
            .set_json(json!({
                "name": "Saucisson brioché",
                "description": "salade de saison",
                "price": "18€",
                "category": "Spécialités"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/menu/categories").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["categories"],
            json!(["Plats principaux", "Poissons", "Spécialités", "Enfants"])
        );

        let req = test::TestRequest::get()
            .uri("/api/menu/?category=Sp%C3%A9cialit%C3%A9s")
            .to_request();
        let items: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items.len(), 2);
    }

    #[actix_web::test]
    async fn empty_category_lists_every_item() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::get()
            .uri("/api/menu/?category=&available_only=true")
            .to_request();
        let items: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items.len(), 5);
    }

    #[actix_web::test]
    async fn boolean_flags_accept_form_spellings() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::patch()
            .uri("/api/reviews/2/approve?approved=False")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        for uri in ["/api/reviews/?approved_only=False", "/api/reviews/?approved_only=0"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
            assert_eq!(all.len(), 4, "{uri}");
        }

        let req = test::TestRequest::get()
            .uri("/api/reviews/?approved_only=1")
            .to_request();
        let approved: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(approved.len(), 3);

        let req = test::TestRequest::patch()
            .uri("/api/menu/1/availability?available=peut-etre")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn malformed_body_is_unprocessable() {
        let app = init_app!(seeded_db().await);
        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({ "name": "Julie" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }
}
