//! Listing search: filter then sort

use rental_types::VehicleListing;

use crate::model::FilterSpec;

/// Apply location, category and price predicates (ANDed), then a stable
/// sort by the spec's key. Input order is kept when no key is set.
pub fn filter_and_sort(listings: &[VehicleListing], spec: &FilterSpec) -> Vec<VehicleListing> {
    let needle = spec.location_needle();

    let mut matched: Vec<VehicleListing> = listings
        .iter()
        .filter(|listing| {
            location_matches(listing, needle.as_deref())
                && spec.category.matches(listing.category)
                && spec.price_band.contains(listing.price)
        })
        .cloned()
        .collect();

    if let Some(key) = spec.sort {
        matched.sort_by(|a, b| key.compare(a, b));
    }

    tracing::trace!(input = listings.len(), output = matched.len(), "filtered listings");
    matched
}

fn location_matches(listing: &VehicleListing, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => {
            listing.location.to_lowercase().contains(needle)
                || listing.name.to_lowercase().contains(needle)
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryFilter, PriceBand, SortKey};
    use rental_types::{VehicleCategory, VehicleStatus};

    fn sample() -> Vec<VehicleListing> {
        vec![
            VehicleListing::new("1", "Toyota Camry", VehicleCategory::Car, "Airport", 55).with_rating(4.7),
            VehicleListing::new("2", "Honda Civic", VehicleCategory::Car, "Downtown", 45).with_rating(4.5),
            VehicleListing::new("3", "Ford Transit", VehicleCategory::Bus, "Central Station", 120)
                .with_rating(4.8)
                .with_status(VehicleStatus::Booked),
            VehicleListing::new("4", "Mountain Bike", VehicleCategory::Cycle, "Park Entrance", 15).with_rating(4.6),
            VehicleListing::new("5", "Tesla Model 3", VehicleCategory::Car, "City Center", 85).with_rating(4.9),
            VehicleListing::new("6", "Volkswagen Bus", VehicleCategory::Bus, "Beach Area", 95).with_rating(4.4),
        ]
    }

    fn ids(listings: &[VehicleListing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let listings = sample();
        let result = filter_and_sort(&listings, &FilterSpec::default());
        assert_eq!(result, listings);
    }

    #[test]
    fn test_category_filter() {
        let listings = vec![
            VehicleListing::new("a", "Sedan", VehicleCategory::Car, "Airport", 55),
            VehicleListing::new("b", "Bike", VehicleCategory::Cycle, "Park", 15),
        ];
        let spec = FilterSpec::from_form("", "Car", "", "").unwrap();
        let result = filter_and_sort(&listings, &spec);
        assert_eq!(result, vec![listings[0].clone()]);
    }

    #[test]
    fn test_location_is_case_insensitive() {
        let spec = FilterSpec::default().with_location("airport");
        assert_eq!(ids(&filter_and_sort(&sample(), &spec)), vec!["1"]);
    }

    #[test]
    fn test_location_matches_name() {
        let spec = FilterSpec::default().with_location("TESLA");
        assert_eq!(ids(&filter_and_sort(&sample(), &spec)), vec!["5"]);
    }

    #[test]
    fn test_empty_location_passes_everything() {
        let spec = FilterSpec::default().with_location("");
        assert_eq!(filter_and_sort(&sample(), &spec).len(), 6);
    }

    #[test]
    fn test_price_band_filter() {
        let spec = FilterSpec::default().with_price_band(PriceBand::From50To100);
        assert_eq!(ids(&filter_and_sort(&sample(), &spec)), vec!["1", "5", "6"]);

        let spec = FilterSpec::default().with_price_band(PriceBand::Over200);
        assert!(filter_and_sort(&sample(), &spec).is_empty());
    }

    #[test]
    fn test_predicates_are_anded() {
        let spec = FilterSpec {
            location: Some("a".to_string()),
            category: CategoryFilter::Only(VehicleCategory::Bus),
            price_band: PriceBand::From50To100,
            sort: None,
        };
        assert_eq!(ids(&filter_and_sort(&sample(), &spec)), vec!["6"]);
    }

    #[test]
    fn test_sort_price_ascending_and_descending() {
        let asc = filter_and_sort(&sample(), &FilterSpec::default().with_sort(SortKey::PriceAscending));
        assert_eq!(ids(&asc), vec!["4", "2", "1", "5", "6", "3"]);

        let desc = filter_and_sort(&sample(), &FilterSpec::default().with_sort(SortKey::PriceDescending));
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_rating_descending() {
        let result = filter_and_sort(&sample(), &FilterSpec::default().with_sort(SortKey::RatingDescending));
        assert_eq!(ids(&result), vec!["5", "3", "1", "4", "2", "6"]);
    }

    #[test]
    fn test_sort_location_is_case_sensitive() {
        let listings = vec![
            VehicleListing::new("1", "A", VehicleCategory::Car, "beach", 10),
            VehicleListing::new("2", "B", VehicleCategory::Car, "Zoo", 10),
            VehicleListing::new("3", "C", VehicleCategory::Car, "Airport", 10),
        ];
        let result = filter_and_sort(&listings, &FilterSpec::default().with_sort(SortKey::LocationAlphabetical));
        // Uppercase sorts before lowercase
        assert_eq!(ids(&result), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let listings = vec![
            VehicleListing::new("x", "A", VehicleCategory::Car, "L", 40),
            VehicleListing::new("y", "B", VehicleCategory::Car, "L", 30),
            VehicleListing::new("z", "C", VehicleCategory::Car, "L", 40),
        ];
        let result = filter_and_sort(&listings, &FilterSpec::default().with_sort(SortKey::PriceDescending));
        assert_eq!(ids(&result), vec!["x", "z", "y"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let spec = FilterSpec::default()
            .with_location("a")
            .with_sort(SortKey::PriceAscending);
        let once = filter_and_sort(&sample(), &spec);
        let twice = filter_and_sort(&once, &spec);
        assert_eq!(once, twice);
    }
}
