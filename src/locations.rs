use url::Url;

/// A dining location whose menu page can be scraped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiningLocation {
    pub key: &'static str,
    pub menu_path: &'static str,
}

/// Every scrapeable location, in sweep order. Campus-center eateries have no
/// stable per-location menu page and are not listed.
pub const DINING_LOCATIONS: &[DiningLocation] = &[
    DiningLocation {
        key: "berkshire",
        menu_path: "/locations-menus/berkshire/menu",
    },
    DiningLocation {
        key: "franklin",
        menu_path: "/locations-menus/franklin/menu",
    },
    DiningLocation {
        key: "worcester",
        menu_path: "/locations-menus/worcester/menu",
    },
    DiningLocation {
        key: "hampshire",
        menu_path: "/locations-menus/hampshire/menu",
    },
];

impl DiningLocation {
    pub fn menu_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(self.menu_path)
    }
}

/// `"Hampshire"` and `" hampshire "` both become `"hampshire"`; inner spaces
/// turn into underscores.
pub fn normalize_key(input: &str) -> String {
    input.trim().to_lowercase().replace(' ', "_")
}

pub fn find(input: &str) -> Option<&'static DiningLocation> {
    let key = normalize_key(input);
    DINING_LOCATIONS.iter().find(|location| location.key == key)
}

pub fn keys() -> Vec<&'static str> {
    DINING_LOCATIONS.iter().map(|location| location.key).collect()
}
