//! French date formatting for the confirmation card and review dates.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

const MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

fn weekday_fr(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

/// "24/10/2026"
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "samedi 24 octobre 2026"
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        weekday_fr(date.weekday()),
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Relative phrase such as "Il y a 2 semaines" for a review posted at `then`.
pub fn relative(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = (now - then).num_days();
    match days {
        i64::MIN..=0 => "Aujourd'hui".to_string(),
        1 => "Hier".to_string(),
        2..=6 => format!("Il y a {days} jours"),
        7..=13 => "Il y a 1 semaine".to_string(),
        14..=29 => format!("Il y a {} semaines", days / 7),
        30..=364 => format!("Il y a {} mois", days / 30),
        365..=729 => "Il y a 1 an".to_string(),
        _ => format!("Il y a {} ans", days / 365),
    }
}
