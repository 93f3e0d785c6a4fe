// Terminal renderings of a breakdown and a comparison. All amounts go
// through the shared currency formatter.
use super::share::share_title;
use shared::models::{CalculationResult, Cheaper, TripComparison, TripParameters};
use shared::utils::format_currency_with;

pub fn render_breakdown(trip: &TripParameters, result: &CalculationResult, currency: &str) -> String {
    let money = |amount: f64| format_currency_with(amount, currency);
    let mut out = format!(
        "{}\n{} travellers, {} days, by {}\n\n",
        share_title(trip),
        trip.travellers,
        trip.days,
        trip.transport.mode().label()
    );
    for (category, amount) in result.categories() {
        out.push_str(&format!(
            "{:<16} {:>16}  {:>5.1}%\n",
            category.label(),
            money(amount),
            result.share_of_total(category)
        ));
    }
    out.push_str(&format!("{:<16} {:>16}\n", "Total", money(result.total_cost)));
    out.push_str(&format!("{:<16} {:>16}\n", "Per person", money(result.cost_per_person)));

    if let Some(details) = result.transport_details {
        out.push_str(&format!(
            "\nFuel: {:.2} litres, {}\n",
            details.fuel_litres,
            money(details.fuel_cost)
        ));
    }
    if let Some((category, amount)) = result.highest_category() {
        out.push_str(&format!(
            "\nHighest expense: {} accounts for {} ({:.1}% of total)\n",
            category.label(),
            money(amount),
            result.share_of_total(category)
        ));
    }
    out
}

fn display_name(trip: &TripParameters, fallback: &str) -> String {
    if trip.destination.trim().is_empty() {
        fallback.to_string()
    } else {
        trip.destination.clone()
    }
}

pub fn render_comparison(
    trip1: &TripParameters,
    trip2: &TripParameters,
    comparison: &TripComparison,
    currency: &str,
) -> String {
    let money = |amount: f64| format_currency_with(amount, currency);
    let name1 = display_name(trip1, "Trip 1");
    let name2 = display_name(trip2, "Trip 2");

    let mut out = match comparison.cheaper {
        Cheaper::Trip1 | Cheaper::Trip2 => {
            let cheaper = if comparison.cheaper == Cheaper::Trip1 { &name1 } else { &name2 };
            format!(
                "{} is cheaper by {} ({:.1}%)\n\n",
                cheaper,
                money(comparison.difference),
                comparison.percentage_difference
            )
        }
        Cheaper::Equal => "Both trips cost the same\n\n".to_string(),
    };

    out.push_str(&format!("{:<16} {:>16} {:>16} {:>16}\n", "Category", name1, name2, "Difference"));
    for row in comparison.category_rows() {
        let diff = if row.diff == 0.0 { "Same".to_string() } else { money(row.diff.abs()) };
        out.push_str(&format!(
            "{:<16} {:>16} {:>16} {:>16}\n",
            row.category.label(),
            money(row.value1),
            money(row.value2),
            diff
        ));
    }
    out.push_str(&format!(
        "{:<16} {:>16} {:>16} {:>16}\n",
        "Total",
        money(comparison.trip1_result.total_cost),
        money(comparison.trip2_result.total_cost),
        money(comparison.difference)
    ));
    out.push_str(&format!(
        "{:<16} {:>16} {:>16}\n",
        "Per person",
        money(comparison.trip1_result.cost_per_person),
        money(comparison.trip2_result.cost_per_person)
    ));
    out
}
