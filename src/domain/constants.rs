/// Interest tags offered by profile setup and discovery.
pub const INTEREST_CATALOG: [&str; 15] = [
    "Shaivism",
    "Vedanta",
    "Yoga",
    "Meditation",
    "Bhakti",
    "Sewa (Service)",
    "Sanskrit",
    "Ayurveda",
    "Pilgrimage",
    "Mantra & Chanting",
    "Sacred Texts",
    "Rudraksha",
    "Tantra",
    "Temple Arts",
    "Hinduism",
];

