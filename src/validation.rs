//! Reservation form state and its synchronous validation.
//!
//! The same checks back the browser form and `POST /api/reservations/`:
//! required fields, a basic email pattern and a date that is not in the past.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::ReservationRequest;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Half-hour slots for the lunch and dinner services.
pub const TIME_SLOTS: [&str; 10] = [
    "12:00", "12:30", "13:00", "13:30", "14:00", "19:00", "19:30", "20:00", "20:30", "21:00",
];

pub const GUEST_OPTIONS: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "8+"];

pub const DEFAULT_GUESTS: &str = "2";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Time,
    Guests,
    FirstName,
    LastName,
    Phone,
    Email,
    Message,
}

/// Error message per invalid field; empty when the form can be submitted.
pub type FieldErrors = BTreeMap<Field, &'static str>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationForm {
    pub date: String,
    pub time: String,
    pub guests: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }
}

impl ReservationForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Guests => &self.guests,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Guests => &mut self.guests,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Checks every field against `today` and returns the failing ones.
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let required = [
            (Field::Date, "Veuillez sélectionner une date"),
            (Field::Time, "Veuillez choisir un horaire"),
            (Field::FirstName, "Le prénom est requis"),
            (Field::LastName, "Le nom est requis"),
            (Field::Phone, "Le téléphone est requis"),
            (Field::Email, "L'email est requis"),
        ];
        for (field, message) in required {
            if self.get(field).trim().is_empty() {
                errors.insert(field, message);
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(self.email.trim()) {
            errors.insert(Field::Email, "Format d'email invalide");
        }

        if !self.date.is_empty() {
            match parse_date(&self.date) {
                Some(date) if date < today => {
                    errors.insert(Field::Date, "Veuillez choisir une date future");
                }
                Some(_) => {}
                None => {
                    errors.insert(Field::Date, "Veuillez sélectionner une date");
                }
            }
        }

        errors
    }

    pub fn to_request(&self) -> ReservationRequest {
        ReservationRequest {
            date: self.date.clone(),
            time: self.time.clone(),
            guests: self.guests.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.clone(),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn lunch_slots() -> impl Iterator<Item = &'static str> {
    TIME_SLOTS.iter().copied().filter(|slot| *slot < "15:00")
}

pub fn dinner_slots() -> impl Iterator<Item = &'static str> {
    TIME_SLOTS.iter().copied().filter(|slot| *slot >= "15:00")
}

/// Option text for a party size ("1 personne", "3 personnes", ...).
pub fn guest_label(option: &str) -> String {
    match option {
        "8+" => "8 personnes ou plus".to_string(),
        "1" => "1 personne".to_string(),
        n => format!("{n} personnes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn filled() -> ReservationForm {
        ReservationForm {
            date: "2026-10-24".into(),
            time: "19:30".into(),
            guests: "4".into(),
            first_name: "Camille".into(),
            last_name: "Martin".into(),
            phone: "06 12 34 56 78".into(),
            email: "camille@example.fr".into(),
            message: String::new(),
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(filled().validate(today()).is_empty());
    }

    #[test]
    fn past_date_is_rejected() {
        let mut form = filled();
        form.date = "2026-10-18".into();
        let errors = form.validate(today());
        assert_eq!(errors.get(&Field::Date), Some(&"Veuillez choisir une date future"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn today_and_later_are_accepted() {
        let mut form = filled();
        form.date = "2026-10-19".into();
        assert!(form.validate(today()).is_empty());
        form.date = "2027-01-01".into();
        assert!(form.validate(today()).is_empty());
    }

    #[test]
    fn email_pattern_examples() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.fr"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn malformed_email_is_field_scoped() {
        let mut form = filled();
        form.email = "a@b".into();
        let errors = form.validate(today());
        assert_eq!(errors.get(&Field::Email), Some(&"Format d'email invalide"));
        assert!(!errors.contains_key(&Field::Date));
    }

    #[test]
    fn empty_form_lists_every_required_field() {
        let errors = ReservationForm::default().validate(today());
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                Field::Date,
                Field::Time,
                Field::FirstName,
                Field::LastName,
                Field::Phone,
                Field::Email
            ]
        );
        assert_eq!(errors[&Field::Email], "L'email est requis");
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut form = ReservationForm::default();
        assert_eq!(form.get(Field::Guests), "2");
        form.set(Field::LastName, "Durand".into());
        assert_eq!(form.last_name, "Durand");
        assert_eq!(form.get(Field::LastName), "Durand");
    }

    #[test]
    fn request_uses_trimmed_contact_fields() {
        let mut form = filled();
        form.first_name = "  Camille ".into();
        let request = form.to_request();
        assert_eq!(request.first_name, "Camille");
        assert_eq!(request.guests, "4");
    }

    #[test]
    fn slots_split_by_service() {
        assert_eq!(lunch_slots().count(), 5);
        assert_eq!(dinner_slots().collect::<Vec<_>>().first(), Some(&"19:00"));
        assert_eq!(guest_label("1"), "1 personne");
        assert_eq!(guest_label("3"), "3 personnes");
        assert_eq!(guest_label("8+"), "8 personnes ou plus");
    }
}
