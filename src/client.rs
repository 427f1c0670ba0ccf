//! HTTP client for the `/api` backend.
//!
//! Every call goes through a [`Transport`], so the status/JSON handling and
//! the error normalization below run the same way in the browser
//! ([`BrowserTransport`], built on `gloo-net`) and in tests.
//!
//! Failures come back as a [`ClientError`]; components turn it into an
//! [`ApiFailure`] (`{success, message, status}`) which keeps the three
//! classes apart:
//!
//! * the server answered with an error status: `status` is that code;
//! * no response at all (connection refused, timeout): `status` is 0;
//! * anything else on our side (bad JSON, request build error): `status` is -1.

#![allow(async_fn_in_trait)]

use std::time::Duration;

use futures::future::{select, Either};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    ContactMessage, ContactRequest, MenuItem, NewReview, Reservation, ReservationRequest,
    RestaurantInfo, Review, SuccessResponse,
};

/// Every request is abandoned after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SERVER_ERROR: &str = "Erreur du serveur";
const NETWORK_ERROR: &str = "Erreur de connexion au serveur";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{message} (HTTP {status})")]
    Server { status: u16, message: String },
    #[error("Erreur de connexion au serveur: {0}")]
    Network(String),
    #[error("Erreur de connexion au serveur: délai dépassé")]
    Timeout,
    #[error("Réponse illisible: {0}")]
    Decode(String),
    #[error("{0}")]
    Request(String),
}

/// Normalized error handed to the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
    pub status: i32,
}

impl From<&ClientError> for ApiFailure {
    fn from(err: &ClientError) -> Self {
        let (message, status) = match err {
            ClientError::Server { status, message } => (message.clone(), i32::from(*status)),
            ClientError::Network(_) | ClientError::Timeout => (NETWORK_ERROR.to_string(), 0),
            ClientError::Decode(_) | ClientError::Request(_) => (err.to_string(), -1),
        };
        ApiFailure {
            success: false,
            message,
            status,
        }
    }
}

impl From<ClientError> for ApiFailure {
    fn from(err: ClientError) -> Self {
        ApiFailure::from(&err)
    }
}

/// Sends one request. `Err` means no HTTP response was obtained.
pub trait Transport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ClientError>;
}

/// `gloo-net` transport bounded by [`REQUEST_TIMEOUT`]. Browser only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ClientError> {
        use gloo_net::http::Request;
        use gloo_timers::future::TimeoutFuture;

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        let built = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Request(e.to_string()))?;

        let exchange = async move {
            let response = built
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            Ok::<_, ClientError>(RawResponse { status, body })
        };
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT.as_millis() as u32);

        match select(Box::pin(exchange), Box::pin(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ClientError::Timeout),
        }
    }
}

/// Error body produced by the backend (`detail`) or a proxy (`error`).
#[derive(Deserialize, Default)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
}

fn server_message(body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .detail
        .or(parsed.error)
        .unwrap_or_else(|| SERVER_ERROR.to_string())
}

#[derive(Deserialize)]
struct CategoriesBody {
    categories: Vec<String>,
}

pub struct ApiClient<T: Transport = BrowserTransport> {
    base: String,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Client for the backend the bundle was built against (`BACKEND_URL`),
    /// or the serving origin when unset.
    pub fn browser() -> Self {
        let backend = option_env!("BACKEND_URL").unwrap_or("");
        ApiClient::new(format!("{}/api", backend.trim_end_matches('/')), BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: impl Into<String>, transport: T) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn execute<R: DeserializeOwned>(&self, request: RawRequest) -> Result<R, ClientError> {
        let response = self.transport.send(request).await?;
        if !(200..300).contains(&response.status) {
            return Err(ClientError::Server {
                status: response.status,
                message: server_message(&response.body),
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, context: &str) -> Result<R, ClientError> {
        let request = RawRequest {
            method: Method::Get,
            url: self.url(path),
            body: None,
        };
        self.execute(request).await.map_err(|err| {
            error!("[API] Erreur lors de la récupération {}: {}", context, err);
            err
        })
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<R, ClientError> {
        let body = serde_json::to_string(body).map_err(|e| ClientError::Request(e.to_string()))?;
        let request = RawRequest {
            method: Method::Post,
            url: self.url(path),
            body: Some(body),
        };
        self.execute(request).await.map_err(|err| {
            error!("[API] Erreur lors de {}: {}", context, err);
            err
        })
    }

    // Menu

    pub async fn menu_items(
        &self,
        category: Option<&str>,
        available_only: bool,
    ) -> Result<Vec<MenuItem>, ClientError> {
        let mut path = format!("/menu/?available_only={available_only}");
        if let Some(category) = category {
            path.push_str("&category=");
            path.push_str(&urlencoding::encode(category));
        }
        let items: Vec<MenuItem> = self.get(&path, "du menu").await?;
        log!("[API] {} éléments de menu reçus", items.len());
        Ok(items)
    }

    pub async fn menu_categories(&self) -> Result<Vec<String>, ClientError> {
        let body: CategoriesBody = self.get("/menu/categories", "des catégories").await?;
        Ok(body.categories)
    }

    pub async fn menu_item(&self, id: &str) -> Result<MenuItem, ClientError> {
        let path = format!("/menu/{}", urlencoding::encode(id));
        self.get(&path, "de l'élément du menu").await
    }

    // Reviews

    pub async fn reviews(&self, approved_only: bool) -> Result<Vec<Review>, ClientError> {
        let path = format!("/reviews/?approved_only={approved_only}");
        self.get(&path, "des avis").await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<SuccessResponse, ClientError> {
        self.post("/reviews/", review, "la création de l'avis").await
    }

    pub async fn review(&self, id: &str) -> Result<Review, ClientError> {
        let path = format!("/reviews/{}", urlencoding::encode(id));
        self.get(&path, "de l'avis").await
    }

    // Reservations

    pub async fn create_reservation(
        &self,
        reservation: &ReservationRequest,
    ) -> Result<SuccessResponse, ClientError> {
        self.post("/reservations/", reservation, "la création de la réservation")
            .await
    }

    pub async fn reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        self.get("/reservations/", "des réservations").await
    }

    pub async fn reservation(&self, id: &str) -> Result<Reservation, ClientError> {
        let path = format!("/reservations/{}", urlencoding::encode(id));
        self.get(&path, "de la réservation").await
    }

    // Contact

    pub async fn send_contact(&self, message: &ContactRequest) -> Result<SuccessResponse, ClientError> {
        self.post("/contact/", message, "l'envoi du message").await
    }

    pub async fn contact_messages(&self) -> Result<Vec<ContactMessage>, ClientError> {
        self.get("/contact/", "des messages").await
    }

    // Restaurant

    pub async fn restaurant_info(&self) -> Result<RestaurantInfo, ClientError> {
        self.get("/info", "des informations du restaurant").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Replays a canned outcome and records what was sent.
    struct MockTransport {
        outcome: Result<RawResponse, ClientError>,
        sent: RefCell<Vec<RawRequest>>,
    }

    impl MockTransport {
        fn responding(status: u16, body: &str) -> Self {
            Self {
                outcome: Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: ClientError) -> Self {
            Self {
                outcome: Err(err),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for &MockTransport {
        async fn send(&self, request: RawRequest) -> Result<RawResponse, ClientError> {
            self.sent.borrow_mut().push(request);
            self.outcome.clone()
        }
    }

    fn client(mock: &MockTransport) -> ApiClient<&MockTransport> {
        ApiClient::new("http://localhost:3004/api", mock)
    }

    #[test]
    fn server_error_keeps_status() {
        let mock = MockTransport::responding(500, r#"{"detail":"Erreur interne du serveur"}"#);
        let err = block_on(client(&mock).reviews(true)).unwrap_err();
        let failure = ApiFailure::from(err);
        assert!(!failure.success);
        assert_eq!(failure.status, 500);
        assert_eq!(failure.message, "Erreur interne du serveur");
    }

    #[test]
    fn error_field_and_generic_message() {
        let mock = MockTransport::responding(502, r#"{"error":"Bad gateway"}"#);
        let failure = ApiFailure::from(block_on(client(&mock).menu_categories()).unwrap_err());
        assert_eq!((failure.status, failure.message.as_str()), (502, "Bad gateway"));

        let mock = MockTransport::responding(503, "<html>down</html>");
        let failure = ApiFailure::from(block_on(client(&mock).menu_categories()).unwrap_err());
        assert_eq!((failure.status, failure.message.as_str()), (503, "Erreur du serveur"));
    }

    #[test]
    fn network_failure_has_status_zero() {
        let mock = MockTransport::failing(ClientError::Network("connection refused".into()));
        let failure = ApiFailure::from(block_on(client(&mock).restaurant_info()).unwrap_err());
        assert!(!failure.success);
        assert_eq!(failure.status, 0);
        assert_eq!(failure.message, "Erreur de connexion au serveur");

        let mock = MockTransport::failing(ClientError::Timeout);
        let failure = ApiFailure::from(block_on(client(&mock).restaurant_info()).unwrap_err());
        assert_eq!(failure.status, 0);
    }

    #[test]
    fn undecodable_body_is_a_client_side_failure() {
        let mock = MockTransport::responding(200, "not json");
        let failure = ApiFailure::from(block_on(client(&mock).reviews(true)).unwrap_err());
        assert_eq!(failure.status, -1);
        assert!(failure.message.starts_with("Réponse illisible"));
    }

    #[test]
    fn menu_query_is_encoded() {
        let mock = MockTransport::responding(200, "[]");
        let items = block_on(client(&mock).menu_items(Some("Spécialités"), true)).unwrap();
        assert!(items.is_empty());
        let sent = mock.sent.borrow();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(
            sent[0].url,
            "http://localhost:3004/api/menu/?available_only=true&category=Sp%C3%A9cialit%C3%A9s"
        );
    }

    #[test]
    fn categories_are_unwrapped() {
        let mock = MockTransport::responding(200, r#"{"categories":["Poissons","Enfants"]}"#);
        let categories = block_on(client(&mock).menu_categories()).unwrap();
        assert_eq!(categories, vec!["Poissons", "Enfants"]);
    }

    #[test]
    fn reservation_is_posted_as_json() {
        let mock = MockTransport::responding(
            200,
            r#"{"success":true,"message":"Réservation confirmée","data":{"reservation_id":"abc"}}"#,
        );
        let request = ReservationRequest {
            date: "2026-10-24".into(),
            time: "12:30".into(),
            guests: "2".into(),
            first_name: "Léa".into(),
            last_name: "Petit".into(),
            phone: "0600000000".into(),
            email: "lea@example.fr".into(),
            message: String::new(),
        };
        let response = block_on(client(&mock).create_reservation(&request)).unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap()["reservation_id"], "abc");

        let sent = mock.sent.borrow();
        assert_eq!(sent[0].method, Method::Post);
        assert!(sent[0].url.ends_with("/api/reservations/"));
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["firstName"], "Léa");
    }
}
