/// A bookable listing. Prices are whole US dollars per night.
#[derive(Debug, Clone, PartialEq)]
pub struct Homestay {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub price: i64,
    pub host: &'static str,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub image: &'static str,
    pub amenities: &'static [&'static str],
    pub description: &'static str,
    pub house_rules: &'static [&'static str],
}

const STANDARD_RULES: &[&str] = &[
    "Check-in after 2 PM",
    "Check-out before 11 AM",
    "No smoking",
    "No parties",
];

static CATALOG: [Homestay; 4] = [
    Homestay {
        id: "1",
        title: "Mountain Village Retreat",
        location: "Himalayan Foothills, Nepal",
        rating: 4.9,
        reviews: 127,
        price: 35,
        host: "Karma Sherpa",
        max_guests: 4,
        bedrooms: 2,
        bathrooms: 1,
        image: "/static/img/mountain-village.jpg",
        amenities: &[
            "WiFi",
            "Mountain View",
            "Local Meals",
            "Trekking Guide",
            "Hot Shower",
            "Garden",
        ],
        description: "Experience authentic mountain life in our traditional homestay. \
            Wake up to stunning Himalayan views and enjoy home-cooked meals made with \
            organic vegetables from our garden.",
        house_rules: STANDARD_RULES,
    },
    Homestay {
        id: "2",
        title: "Coastal Paradise Home",
        location: "Bali, Indonesia",
        rating: 4.8,
        reviews: 94,
        price: 45,
        host: "Made Sutrisna",
        max_guests: 6,
        bedrooms: 3,
        bathrooms: 2,
        image: "/static/img/coastal-homestay.jpg",
        amenities: &["Beach Access", "WiFi", "Surfboard", "Cooking Class"],
        description: "A family home a short walk from the beach. Borrow a surfboard, \
            join a Balinese cooking class in the open kitchen and fall asleep to the \
            sound of the waves.",
        house_rules: STANDARD_RULES,
    },
    Homestay {
        id: "3",
        title: "Traditional Village House",
        location: "Chiang Mai, Thailand",
        rating: 4.7,
        reviews: 68,
        price: 28,
        host: "Niran Patel",
        max_guests: 3,
        bedrooms: 1,
        bathrooms: 1,
        image: "/static/img/mountain-village.jpg",
        amenities: &["WiFi", "Rice Paddy View", "Bike Rental", "Cooking Class"],
        description: "A teak house on stilts overlooking the rice paddies. Cycle to the \
            old city, learn to cook northern Thai dishes and spend quiet evenings on \
            the veranda.",
        house_rules: STANDARD_RULES,
    },
    Homestay {
        id: "4",
        title: "Lakeside Cottage",
        location: "Pokhara, Nepal",
        rating: 4.9,
        reviews: 152,
        price: 40,
        host: "Sita Gurung",
        max_guests: 5,
        bedrooms: 2,
        bathrooms: 2,
        image: "/static/img/coastal-homestay.jpg",
        amenities: &["Lake View", "WiFi", "Kayaking", "Bonfire Area"],
        description: "A cottage on the shore of Phewa Lake with the Annapurna range on \
            the horizon. Paddle out at sunrise and gather around the bonfire after \
            dinner.",
        house_rules: STANDARD_RULES,
    },
];

pub fn catalog() -> &'static [Homestay] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static Homestay> {
    CATALOG.iter().find(|h| h.id == id)
}

pub const DEFAULT_MIN_PRICE: i64 = 0;
pub const DEFAULT_MAX_PRICE: i64 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub min_price: i64,
    pub max_price: i64,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl SearchFilter {
    pub fn matches(&self, homestay: &Homestay) -> bool {
        let needle = self.query.trim().to_lowercase();
        let matches_search = homestay.title.to_lowercase().contains(&needle)
            || homestay.location.to_lowercase().contains(&needle);
        let matches_price = homestay.price >= self.min_price && homestay.price <= self.max_price;
        matches_search && matches_price
    }

    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty()
            && self.min_price == DEFAULT_MIN_PRICE
            && self.max_price == DEFAULT_MAX_PRICE
    }
}

/// Catalogue entries matching `filter`, in catalogue order.
pub fn search(filter: &SearchFilter) -> Vec<&'static Homestay> {
    CATALOG.iter().filter(|h| filter.matches(h)).collect()
}
