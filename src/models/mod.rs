//! Records exchanged between the site and the `/api` backend.
//!
//! Field names on the wire follow the backend's JSON (`firstName`,
//! `createdAt`, `openingHours`, ...), so most structs carry serde renames.

pub mod contact;
pub mod menu_item;
pub mod reservation;
pub mod restaurant;
pub mod review;

use serde::{Deserialize, Serialize};

pub use contact::{ContactMessage, ContactRequest, ContactStatus};
pub use menu_item::{CategoryFilter, MenuItem, NewMenuItem};
pub use reservation::{Reservation, ReservationRequest, ReservationStatus};
pub use restaurant::{OpeningHours, RestaurantInfo, SocialMedia};
pub use review::{NewReview, Review};

/// Envelope returned by every create/update route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Raised when a status string stored or received does not name a known state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Statut invalide. Utilisez: {allowed}")]
pub struct UnknownStatus {
    pub allowed: &'static str,
}
