// Plain-text summary for clipboard / native share targets.
use shared::models::{CalculationResult, TripParameters};
use shared::utils::{format_currency_with, slugify};

pub fn share_title(trip: &TripParameters) -> String {
    match trip.trip_label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => format!("Trip to {} ({})", trip.destination, label),
        None => format!("Trip to {}", trip.destination),
    }
}

pub fn share_summary(trip: &TripParameters, result: &CalculationResult, currency: &str) -> String {
    let money = |amount: f64| format_currency_with(amount, currency);

    let mut text = format!(
        "{}\nTravellers: {} | Days: {}\nTotal Cost: {}\nCost Per Person: {}\n\nBreakdown:\n",
        share_title(trip),
        trip.travellers,
        trip.days,
        money(result.total_cost),
        money(result.cost_per_person),
    );
    for (category, amount) in result.categories() {
        text.push_str(&format!("- {}: {}\n", category.label(), money(amount)));
    }
    text.push_str("\nCalculated with Trip Expense Calculator");
    text
}

/// File name (without extension) for exports of this trip, e.g. `trip-new-delhi`.
pub fn export_file_stem(trip: &TripParameters) -> String {
    let slug = slugify(&trip.destination);
    if slug.is_empty() {
        "trip".to_string()
    } else {
        format!("trip-{}", slug)
    }
}
