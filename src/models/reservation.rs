use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::UnknownStatus;

/// Booking request as submitted by the reservation form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub date: String, // YYYY-MM-DD
    pub time: String,
    pub guests: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            _ => Err(UnknownStatus {
                allowed: "pending, confirmed, cancelled",
            }),
        }
    }
}

/// Stored reservation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    #[serde(flatten)]
    pub request: ReservationRequest,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

impl Reservation {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.request.first_name, self.request.last_name)
    }
}
