use crate::domain::validation::{check_length, FieldErrors};
use crate::request::FormFields;

/// `(value, label)` pairs offered in the property type select.
pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("house", "Entire House"),
    ("apartment", "Apartment"),
    ("room", "Private Room"),
    ("villa", "Villa"),
    ("cabin", "Cabin"),
    ("cottage", "Cottage"),
    ("bungalow", "Bungalow"),
];

pub const AMENITIES: &[&str] = &[
    "WiFi",
    "Kitchen",
    "Parking",
    "Pool",
    "Air Conditioning",
    "Heating",
    "Washer",
    "Dryer",
    "TV",
    "Workspace",
    "Garden",
    "Balcony",
    "Ocean View",
    "Mountain View",
    "Pet Friendly",
];

pub const DEFAULT_PRICE_PER_NIGHT: i64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostApplicationForm {
    pub property_name: String,
    pub property_type: String,
    pub property_location: String,
    pub property_description: String,
    pub num_rooms: i64,
    pub price_per_night: i64,
    pub amenities: Vec<String>,
}

impl Default for HostApplicationForm {
    fn default() -> Self {
        Self {
            property_name: String::new(),
            property_type: String::new(),
            property_location: String::new(),
            property_description: String::new(),
            num_rooms: 1,
            price_per_night: DEFAULT_PRICE_PER_NIGHT,
            amenities: Vec::new(),
        }
    }
}

/// Numeric inputs that fail to parse fall back to 1, like an empty spinner.
fn parse_count(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

impl HostApplicationForm {
    pub fn from_form(form: &FormFields) -> Self {
        // Known amenities only, in the canonical order, each once.
        let picked: Vec<&str> = form.get_all("amenities").collect();
        let amenities = AMENITIES
            .iter()
            .filter(|a| picked.contains(*a))
            .map(|a| a.to_string())
            .collect();

        Self {
            property_name: form.get("property_name").trim().to_string(),
            property_type: form.get("property_type").trim().to_string(),
            property_location: form.get("property_location").trim().to_string(),
            property_description: form.get("property_description").trim().to_string(),
            num_rooms: parse_count(form.get("num_rooms")),
            price_per_night: parse_count(form.get("price_per_night")),
            amenities,
        }
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_length(
            &mut errors,
            "property_name",
            "Property name",
            &self.property_name,
            3,
            100,
        );
        if !PROPERTY_TYPES.iter().any(|(v, _)| *v == self.property_type) {
            errors.add("property_type", "Please select a property type");
        }
        check_length(
            &mut errors,
            "property_location",
            "Location",
            &self.property_location,
            3,
            200,
        );
        check_length(
            &mut errors,
            "property_description",
            "Description",
            &self.property_description,
            20,
            2000,
        );
        if self.num_rooms < 1 {
            errors.add("num_rooms", "At least 1 room required");
        } else if self.num_rooms > 50 {
            errors.add("num_rooms", "At most 50 rooms");
        }
        if self.price_per_night < 1 {
            errors.add("price_per_night", "Price must be at least $1");
        } else if self.price_per_night > 10_000 {
            errors.add("price_per_night", "Price must be at most $10,000");
        }

        errors.into_result(())
    }
}
