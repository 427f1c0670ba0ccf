use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialMedia {
    pub instagram: String,
    pub facebook: String,
}

/// Opening hours as display strings, one per weekday.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl OpeningHours {
    /// (French day label, hours) from Monday to Sunday.
    pub fn days(&self) -> [(&'static str, &str); 7] {
        [
            ("Lundi", &self.monday),
            ("Mardi", &self.tuesday),
            ("Mercredi", &self.wednesday),
            ("Jeudi", &self.thursday),
            ("Vendredi", &self.friday),
            ("Samedi", &self.saturday),
            ("Dimanche", &self.sunday),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RestaurantInfo {
    pub name: String,
    pub slogan: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "socialMedia")]
    pub social_media: SocialMedia,
    #[serde(rename = "openingHours")]
    pub opening_hours: OpeningHours,
    #[serde(rename = "closureInfo")]
    pub closure_info: String,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        const LUNCH: &str = "12h00 - 14h00";
        const LUNCH_AND_DINNER: &str = "12h00 - 14h00 • 19h00 - 22h00";
        const CLOSED: &str = "Fermé";

        Self {
            name: "Café Comptoir".into(),
            slogan: "Le rendez-vous des bons vivants à Montbrison".into(),
            address: "14 Boulevard de la Madeleine, 42600 Montbrison, France".into(),
            phone: "+33 4 77 58 46 77".into(),
            email: "cafecomptoirmontbrison@gmail.com".into(),
            social_media: SocialMedia {
                instagram: "@cafecomptoirmontbrison".into(),
                facebook: "Café Comptoir Montbrison".into(),
            },
            opening_hours: OpeningHours {
                monday: LUNCH.into(),
                tuesday: LUNCH.into(),
                wednesday: CLOSED.into(),
                thursday: LUNCH.into(),
                friday: LUNCH_AND_DINNER.into(),
                saturday: LUNCH_AND_DINNER.into(),
                sunday: CLOSED.into(),
            },
            closure_info: "Fermeture annuelle : du 17 août au 31 août 2025".into(),
        }
    }
}

impl RestaurantInfo {
    /// `tel:` link target with spaces removed.
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }
}
