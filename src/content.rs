//! Static copy of the site and the fallback data shown when the API is down.
//! The fallback menu and reviews also seed an empty database.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{MenuItem, Review};

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { id: "accueil", label: "Accueil" },
    NavItem { id: "a-propos", label: "À propos" },
    NavItem { id: "menu", label: "Menu" },
    NavItem { id: "galerie", label: "Galerie" },
    NavItem { id: "infos", label: "Infos pratiques" },
    NavItem { id: "avis", label: "Avis clients" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "♥",
        title: "Passion culinaire",
        description: "Notre chef et son équipe préparent chaque plat avec amour et savoir-faire",
    },
    Feature {
        icon: "❦",
        title: "Produits locaux",
        description: "Nous privilégions les producteurs locaux pour une cuisine authentique et durable",
    },
    Feature {
        icon: "☺",
        title: "Ambiance conviviale",
        description: "Un cadre chaleureux pour partager de bons moments entre amis ou en famille",
    },
    Feature {
        icon: "✦",
        title: "Tradition française",
        description: "Une cuisine qui honore les saveurs traditionnelles de notre terroir",
    },
];

pub const ABOUT_TITLE: &str = "Notre histoire et philosophie";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Situé au cœur de Montbrison, le Café Comptoir vous accueille dans une atmosphère chaleureuse et authentique depuis de nombreuses années. Notre restaurant familial s'engage à vous proposer une cuisine française traditionnelle, préparée avec passion à partir de produits frais et locaux.",
    "Notre chef et son équipe mettent un point d'honneur à sélectionner les meilleurs produits de nos producteurs locaux pour vous offrir des plats savoureux qui célèbrent les saveurs de notre terroir. De l'apéritif au dessert, chaque moment passé chez nous est pensé pour créer des souvenirs gourmands.",
    "L'ambiance conviviale de notre établissement en fait le lieu idéal pour vos déjeuners d'affaires, repas en famille ou dîners entre amis. Notre équipe vous accueille avec le sourire et met tout en œuvre pour que votre expérience soit mémorable.",
];

pub const QUALITY_COMMITMENTS: [&str; 3] = [
    "Produits frais sélectionnés quotidiennement",
    "Partenariats avec des producteurs locaux de qualité",
    "Cuisine maison préparée avec savoir-faire artisanal",
];

pub struct DailyMenu {
    pub starter: &'static str,
    pub main: &'static str,
    pub dessert: &'static str,
    pub price: &'static str,
}

pub const MENU_DU_JOUR: DailyMenu = DailyMenu {
    starter: "Terrine maison aux herbes de Provence",
    main: "Cuisse de canard confite, gratin de crozets",
    dessert: "Tarte aux pommes de nos vergers",
    price: "28€",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub url: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub const GALLERY_IMAGES: [GalleryImage; 6] = [
    GalleryImage {
        id: 1,
        url: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800&q=80",
        alt: "Intérieur chaleureux du restaurant",
        caption: "Notre salle principale",
    },
    GalleryImage {
        id: 2,
        url: "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=800&q=80",
        alt: "Plat signature du restaurant",
        caption: "Pavé de rumsteck grillé",
    },
    GalleryImage {
        id: 3,
        url: "https://images.unsplash.com/photo-1559339352-11d035aa65de?w=800&q=80",
        alt: "Ambiance conviviale",
        caption: "Moments de partage",
    },
    GalleryImage {
        id: 4,
        url: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800&q=80",
        alt: "Cuisine traditionnelle française",
        caption: "Nos spécialités maison",
    },
    GalleryImage {
        id: 5,
        url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&q=80",
        alt: "Terrasse du restaurant",
        caption: "Notre terrasse d'été",
    },
    GalleryImage {
        id: 6,
        url: "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=800&q=80",
        alt: "Équipe du restaurant",
        caption: "Notre équipe passionnée",
    },
];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=600&q=80";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=600&q=80";

pub const GOOGLE_REVIEW_URL: &str =
    "https://www.google.com/maps/place/14+Boulevard+de+la+Madeleine,+42600+Montbrison";
pub const TRIPADVISOR_URL: &str = "https://www.tripadvisor.fr";

pub struct ReviewStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Figures shown under the review average.
pub const REVIEW_STATS: [ReviewStat; 3] = [
    ReviewStat { value: "95%", label: "Clients satisfaits" },
    ReviewStat { value: "4.8", label: "Note moyenne" },
    ReviewStat { value: "92%", label: "Recommandations" },
];

pub const RESERVATION_TIPS: [&str; 4] = [
    "Réservation recommandée, surtout pour les weekends",
    "Pour les groupes de plus de 8 personnes, contactez-nous directement",
    "Merci de nous prévenir en cas d'allergies alimentaires",
    "Annulation possible jusqu'à 2h avant l'heure de réservation",
];

fn dish(id: &str, name: &str, description: &str, price: &str, category: &str) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price: price.into(),
        category: category.into(),
        available: true,
        image_url: None,
    }
}

pub fn fallback_menu() -> Vec<MenuItem> {
    vec![
        dish(
            "1",
            "Pavé de rumsteck grillé à la plancha",
            "avec pommes de terre rôties et légumes frais de saison",
            "22€",
            "Plats principaux",
        ),
        dish(
            "2",
            "Cuisse de canard confite",
            "gratin de crozets aux chanterelles et légumes du marché",
            "24€",
            "Plats principaux",
        ),
        dish(
            "3",
            "Filet de féra du lac Léman",
            "sauce citronnée, légumes croquants et pommes vapeur",
            "26€",
            "Poissons",
        ),
        dish(
            "4",
            "Feuillet fondant au reblochon et morilles",
            "salade verte et pommes de terre sautées à l'ail",
            "19€",
            "Spécialités",
        ),
        dish(
            "5",
            "Menu Enfant",
            "Tagliatelles, nuggets de poulet fermier, glace surprise",
            "12€",
            "Enfants",
        ),
    ]
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

fn review(id: &str, name: &str, rating: u8, comment: &str, created_at: NaiveDateTime) -> Review {
    Review {
        id: id.into(),
        name: name.into(),
        rating,
        comment: comment.into(),
        email: None,
        approved: true,
        created_at,
    }
}

pub fn fallback_reviews() -> Vec<Review> {
    vec![
        review(
            "1",
            "Sophie L.",
            5,
            "Un vrai régal, plats copieux et ambiance conviviale ! L'équipe est aux petits soins.",
            at(2024, 12, 1, 12, 0),
        ),
        review(
            "2",
            "Marc D.",
            5,
            "Le meilleur restaurant français de Montbrison, je recommande vivement. Les produits sont frais et locaux.",
            at(2024, 11, 20, 14, 30),
        ),
        review(
            "3",
            "Isabelle R.",
            4,
            "Excellente cuisine traditionnelle, service chaleureux. Parfait pour un déjeuner en famille.",
            at(2024, 12, 10, 19, 15),
        ),
        review(
            "4",
            "Jean-Pierre M.",
            5,
            "Une adresse incontournable ! La cuisse de canard confite est un délice.",
            at(2024, 12, 15, 13, 45),
        ),
    ]
}
