//! Service Catalog
//!
//! Static shop data: the services on offer, the stylists, and the fixed
//! set of appointment slots. Loaded once at startup (defaults or the
//! `[catalog]` config section) and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Appointment slots offered every day. There is no 13:00 slot (lunch).
pub const DEFAULT_TIME_SLOTS: [&str; 10] = [
    "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00", "20:00",
];

/// A bookable service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    /// Display price with currency suffix, e.g. "1500₽"
    pub price: String,
    /// Display duration, e.g. "45 мин"
    pub duration: String,
    /// Icon name understood by the page renderer
    pub icon: String,
}

/// A stylist ("master") who takes appointments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: u32,
    pub name: String,
    /// Display label, e.g. "8 лет"
    pub experience: String,
    pub specialty: String,
    pub image_url: String,
}

/// Everything the landing page and the booking dialog offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_services")]
    pub services: Vec<Service>,

    #[serde(default = "default_stylists")]
    pub stylists: Vec<Stylist>,

    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            services: default_services(),
            stylists: default_stylists(),
            time_slots: default_time_slots(),
        }
    }
}

impl Catalog {
    /// Find a service by its display name
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Find a stylist by name
    pub fn stylist(&self, name: &str) -> Option<&Stylist> {
        self.stylists.iter().find(|m| m.name == name)
    }

    /// Whether `slot` is one of the offered time slots
    pub fn has_slot(&self, slot: &str) -> bool {
        self.time_slots.iter().any(|s| s == slot)
    }
}

fn service(id: u32, name: &str, price: &str, duration: &str, icon: &str) -> Service {
    Service {
        id,
        name: name.to_string(),
        price: price.to_string(),
        duration: duration.to_string(),
        icon: icon.to_string(),
    }
}

fn stylist(id: u32, name: &str, experience: &str, specialty: &str, image_url: &str) -> Stylist {
    Stylist {
        id,
        name: name.to_string(),
        experience: experience.to_string(),
        specialty: specialty.to_string(),
        image_url: image_url.to_string(),
    }
}

fn default_services() -> Vec<Service> {
    vec![
        service(1, "Классическая стрижка", "1500₽", "45 мин", "Scissors"),
        service(2, "Стрижка + Борода", "2200₽", "60 мин", "User"),
        service(3, "Королевское бритьё", "1800₽", "50 мин", "Sparkles"),
        service(4, "Детская стрижка", "1000₽", "30 мин", "Baby"),
        service(5, "Камуфляж седины", "1200₽", "40 мин", "Paintbrush"),
        service(6, "Уход за бородой", "900₽", "30 мин", "Heart"),
    ]
}

fn default_stylists() -> Vec<Stylist> {
    vec![
        stylist(
            1,
            "Александр Иванов",
            "8 лет",
            "Классика и fade",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
        ),
        stylist(
            2,
            "Дмитрий Петров",
            "5 лет",
            "Борода и бритьё",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
        ),
        stylist(
            3,
            "Михаил Сидоров",
            "10 лет",
            "Авторские стрижки",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop",
        ),
    ]
}

fn default_time_slots() -> Vec<String> {
    DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots_skip_lunch() {
        let catalog = Catalog::default();

        assert_eq!(catalog.time_slots.len(), 10);
        assert_eq!(catalog.time_slots.first().map(String::as_str), Some("10:00"));
        assert_eq!(catalog.time_slots.last().map(String::as_str), Some("20:00"));
        assert!(catalog.has_slot("12:00"));
        assert!(!catalog.has_slot("13:00"));
        assert!(catalog.has_slot("14:00"));
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = Catalog::default();

        assert_eq!(catalog.service("Уход за бородой").map(|s| s.id), Some(6));
        assert_eq!(catalog.stylist("Дмитрий Петров").map(|m| m.id), Some(2));
        assert!(catalog.service("Маникюр").is_none());
        assert!(catalog.stylist("").is_none());
    }

    #[test]
    fn test_partial_catalog_falls_back_to_defaults() {
        let catalog: Catalog = toml::from_str(
            r#"
            time_slots = ["09:00", "10:00"]
            "#,
        )
        .unwrap();

        assert_eq!(catalog.time_slots, vec!["09:00", "10:00"]);
        assert_eq!(catalog.services.len(), 6);
        assert_eq!(catalog.stylists.len(), 3);
    }
}
