use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use leptos::logging::error;
use serde_json::json;
use thiserror::Error;

use crate::models::UnknownStatus;

/// Errors returned by the `/api` handlers, rendered as `{"detail": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Erreur interne du serveur")]
    Database(#[from] rusqlite::Error),
}

impl From<UnknownStatus> for ApiError {
    fn from(err: UnknownStatus) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(err) = self {
            error!("[API] Database error: {:?}", err);
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_per_variant() {
        assert_eq!(ApiError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("Avis non trouvé").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unprocessable("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        let db = ApiError::from(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.to_string(), "Erreur interne du serveur");
    }

    #[test]
    fn unknown_status_is_a_bad_request() {
        let err = ApiError::from(UnknownStatus { allowed: "new, read, responded" });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Statut invalide. Utilisez: new, read, responded");
    }
}
