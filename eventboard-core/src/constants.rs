/// Sentinel shown for the "no category filter" choice.
pub const CATEGORY_ALL: &str = "All";

pub const CATEGORIES: [&str; 8] = [
    "Art",
    "Music",
    "Business",
    "Conference",
    "Workshop",
    "Party",
    "Sport",
    "Tech",
];

pub const PRIORITIES: [&str; 3] = ["High", "Medium", "Low"];

/// Placeholder pictures are served from here, seeded per event.
pub const PICTURE_SERVICE_URL: &str = "https://picsum.photos/seed";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Page size used when listing documents.
pub const LIST_PAGE_SIZE: usize = 100;

pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:4096";
