#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub homestay_count: u32,
    pub starting_price: i64,
    pub tags: &'static [&'static str],
}

static DESTINATIONS: [Destination; 5] = [
    Destination {
        id: "1",
        name: "Santorini",
        country: "Greece",
        description: "Experience Mediterranean magic with stunning sunsets and whitewashed \
            villages perched on volcanic cliffs.",
        image: "/static/img/santorini-sunset.jpg",
        homestay_count: 124,
        starting_price: 65,
        tags: &["Romantic", "Beach", "Photography"],
    },
    Destination {
        id: "2",
        name: "Cusco Region",
        country: "Peru",
        description: "Gateway to Machu Picchu with rich Incan heritage, ancient ruins, and \
            warm local hospitality.",
        image: "/static/img/machu-picchu.jpg",
        homestay_count: 89,
        starting_price: 28,
        tags: &["Adventure", "History", "Trekking"],
    },
    Destination {
        id: "3",
        name: "Marrakech",
        country: "Morocco",
        description: "Stay in traditional riads with ornate courtyards, vibrant souks, and \
            authentic Moroccan cuisine.",
        image: "/static/img/moroccan-riad.jpg",
        homestay_count: 156,
        starting_price: 42,
        tags: &["Cultural", "Food", "Architecture"],
    },
    Destination {
        id: "4",
        name: "Kerala",
        country: "India",
        description: "Float through serene backwaters on traditional houseboats surrounded \
            by lush coconut groves.",
        image: "/static/img/kerala-backwaters.jpg",
        homestay_count: 203,
        starting_price: 22,
        tags: &["Nature", "Wellness", "Unique Stays"],
    },
    Destination {
        id: "5",
        name: "Kyoto",
        country: "Japan",
        description: "Experience traditional Japanese hospitality in historic ryokans with \
            tatami rooms and zen gardens.",
        image: "/static/img/japanese-ryokan.jpg",
        homestay_count: 78,
        starting_price: 85,
        tags: &["Cultural", "Peaceful", "Traditional"],
    },
];

pub fn destinations() -> &'static [Destination] {
    &DESTINATIONS
}

/// The destination shown as the large card; the rest follow in order.
pub fn featured() -> (&'static Destination, &'static [Destination]) {
    let (first, rest) = DESTINATIONS.split_at(1);
    (&first[0], rest)
}
