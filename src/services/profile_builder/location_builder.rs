// ============================================
// Location Preference Builder
// ============================================
//
// Counts city occurrences across the user's content history and keeps the
// top N, ordered by descending count then ascending city name. The user's
// declared city is recorded separately.

use crate::models::{ContentItem, LocationPreference, UserProfile};
use std::collections::HashMap;

pub(crate) fn build_location_preference(
    user: &UserProfile,
    content_history: &[ContentItem],
    top_cities: usize,
) -> LocationPreference {
    let mut city_counts: HashMap<&str, u32> = HashMap::new();

    for item in content_history {
        if let Some(city) = item.location.as_ref().and_then(|l| l.city.as_deref()) {
            *city_counts.entry(city).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, u32)> = city_counts.into_iter().collect();
    // Count descending, city name ascending on ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let top_cities = ranked
        .into_iter()
        .take(top_cities)
        .map(|(city, _)| city.to_string())
        .collect();

    let current_city = user.location.as_ref().and_then(|l| l.city.clone());

    LocationPreference {
        top_cities,
        current_city,
    }
}
