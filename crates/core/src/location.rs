/// Canonical "City, State" names accepted on review submission.
pub const ALLOWED_LOCATIONS: &[&str] = &[
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

/// Look up a submitted location on the allow-list (exact match).
pub fn canonical_location(location: &str) -> Option<&'static str> {
    ALLOWED_LOCATIONS.iter().copied().find(|allowed| *allowed == location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_has_no_duplicates() {
        let mut sorted = ALLOWED_LOCATIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ALLOWED_LOCATIONS.len());
    }

    #[test]
    fn test_every_entry_is_city_comma_state() {
        for loc in ALLOWED_LOCATIONS {
            let (city, state) = loc.split_once(", ").expect("missing ', ' separator");
            assert!(!city.is_empty() && !state.is_empty(), "bad entry {loc}");
            assert!(!state.contains(','), "merged entry {loc}");
        }
    }

    #[test]
    fn test_canonical_location_exact_match_only() {
        assert_eq!(canonical_location("Phoenix, Arizona"), Some("Phoenix, Arizona"));
        assert_eq!(canonical_location("Denver, Colorado"), Some("Denver, Colorado"));
        assert_eq!(canonical_location("phoenix, arizona"), None);
        assert_eq!(canonical_location(" Phoenix, Arizona"), None);
        assert_eq!(canonical_location("Atlantis"), None);
        assert_eq!(canonical_location(""), None);
    }
}
