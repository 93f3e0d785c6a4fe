use super::estimator::calculate_trip;
use shared::models::{Cheaper, TripComparison, TripParameters};
use shared::utils::round2;

/// Calculates both trips and reports which one is cheaper and by how much,
/// relative to the more expensive trip.
pub fn compare_trips(trip1: &TripParameters, trip2: &TripParameters) -> TripComparison {
    let trip1_result = calculate_trip(trip1);
    let trip2_result = calculate_trip(trip2);
    let (total1, total2) = (trip1_result.total_cost, trip2_result.total_cost);

    let difference = (total1 - total2).abs();
    let higher = total1.max(total2);
    let percentage_difference = if higher > 0.0 { difference / higher * 100.0 } else { 0.0 };

    let cheaper = if total1 < total2 {
        Cheaper::Trip1
    } else if total2 < total1 {
        Cheaper::Trip2
    } else {
        Cheaper::Equal
    };

    tracing::debug!(
        trip1 = %trip1.destination,
        trip2 = %trip2.destination,
        ?cheaper,
        difference,
        "Compared trips"
    );

    TripComparison {
        trip1_result,
        trip2_result,
        cheaper,
        difference: round2(difference),
        percentage_difference: round2(percentage_difference),
    }
}
