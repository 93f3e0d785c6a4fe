// Flat per-day rates; none of them scale with the number of travellers.
use shared::models::TripParameters;

pub fn local_transport_cost(trip: &TripParameters) -> f64 {
    trip.local_transport_per_day * f64::from(trip.days)
}

pub fn sightseeing_cost(trip: &TripParameters) -> f64 {
    trip.sightseeing_per_day * f64::from(trip.days)
}

pub fn misc_cost(trip: &TripParameters) -> f64 {
    trip.misc_per_day * f64::from(trip.days)
}
