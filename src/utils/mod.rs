// Shared similarity primitives for the ranking and recommendation paths.

use crate::models::GeoLocation;
use std::collections::HashSet;

/// Jaccard similarity of two interest-tag sets: |A ∩ B| / |A ∪ B|.
/// Returns 0.0 when either side is empty.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(|s| s.as_str()).collect();
    let set_b: HashSet<&str> = b.iter().map(|s| s.as_str()).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Tiered location similarity: 1.0 for the same city, 0.5 for the same
/// country with different cities, 0.1 otherwise (including missing city
/// or country data).
pub fn location_similarity(a: &GeoLocation, b: &GeoLocation) -> f64 {
    match (&a.city, &b.city) {
        (Some(city_a), Some(city_b)) if city_a == city_b => return 1.0,
        _ => {}
    }

    match (&a.country, &b.country) {
        (Some(country_a), Some(country_b)) if country_a == country_b => 0.5,
        _ => 0.1,
    }
}
