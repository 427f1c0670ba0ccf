use serde::{Deserialize, Serialize};

fn default_available() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String, // display string, e.g. "22€"
    pub category: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `POST /api/menu/` and `PUT /api/menu/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewMenuItem {
    pub fn into_item(self, id: String) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            available: self.available,
            image_url: self.image_url,
        }
    }
}

/// Category tab selected in the menu section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => item.category == *category,
        }
    }
}

/// Items of `items` accepted by `filter`, in their original order.
pub fn filter_by_category(items: &[MenuItem], filter: &CategoryFilter) -> Vec<MenuItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Distinct categories of `items`, in order of first appearance.
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Tab label shown for a category.
pub fn category_label(category: &str) -> &str {
    match category {
        "Enfants" => "Menu Enfant",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: format!("Plat {id}"),
            description: String::new(),
            price: "10€".into(),
            category: category.into(),
            available: true,
            image_url: None,
        }
    }

    fn sample() -> Vec<MenuItem> {
        vec![
            item("1", "Plats principaux"),
            item("2", "Plats principaux"),
            item("3", "Poissons"),
            item("4", "Enfants"),
            item("5", "Poissons"),
        ]
    }

    #[test]
    fn filter_returns_only_selected_category() {
        let items = sample();
        let fish = filter_by_category(&items, &CategoryFilter::Category("Poissons".into()));
        let ids: Vec<&str> = fish.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "5"]);

        let mains = filter_by_category(&items, &CategoryFilter::Category("Plats principaux".into()));
        assert_eq!(mains.len(), 2);
        assert!(mains.iter().all(|i| i.category == "Plats principaux"));

        let kids = filter_by_category(&items, &CategoryFilter::Category("Enfants".into()));
        assert_eq!(kids.len(), 1);
        assert_eq!(kids[0].id, "4");
    }

    #[test]
    fn all_filter_keeps_everything() {
        let items = sample();
        assert_eq!(filter_by_category(&items, &CategoryFilter::All), items);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let items = sample();
        assert!(filter_by_category(&items, &CategoryFilter::Category("Desserts".into())).is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(
            categories(&sample()),
            vec!["Plats principaux", "Poissons", "Enfants"]
        );
    }

    #[test]
    fn missing_availability_defaults_to_true() {
        let json = r#"{"id":"9","name":"Tarte","description":"maison","price":"7€","category":"Desserts"}"#;
        let parsed: MenuItem = serde_json::from_str(json).unwrap();
        assert!(parsed.available);
        assert_eq!(parsed.image_url, None);
    }

    #[test]
    fn children_tab_has_its_own_label() {
        assert_eq!(category_label("Enfants"), "Menu Enfant");
        assert_eq!(category_label("Poissons"), "Poissons");
    }
}
