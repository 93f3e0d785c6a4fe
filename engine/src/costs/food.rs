use shared::models::TripParameters;

pub fn food_cost(trip: &TripParameters) -> f64 {
    let days = f64::from(trip.days);
    if trip.meals_is_per_person {
        trip.meals_per_day * f64::from(trip.travellers) * days
    } else {
        trip.meals_per_day * days
    }
}
