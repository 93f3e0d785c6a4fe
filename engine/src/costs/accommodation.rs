use shared::models::TripParameters;

/// Hotel cost is per room per night; a trip of `days` days has `days - 1` nights.
pub fn accommodation_cost(trip: &TripParameters) -> f64 {
    let nights = trip.days.saturating_sub(1);
    trip.hotel_rate_per_night * f64::from(nights) * f64::from(trip.number_of_rooms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::test_support::assert_close;

    fn stay(days: u32, rooms: u32, rate: f64) -> TripParameters {
        TripParameters {
            days,
            number_of_rooms: rooms,
            hotel_rate_per_night: rate,
            ..TripParameters::default()
        }
    }

    #[test]
    fn test_nights_are_days_minus_one() {
        assert_close(accommodation_cost(&stay(3, 1, 2000.0)), 4000.0);
        assert_close(accommodation_cost(&stay(5, 2, 1500.0)), 12000.0);
    }

    #[test]
    fn test_day_trip_has_no_nights() {
        assert_close(accommodation_cost(&stay(1, 3, 2000.0)), 0.0);
        assert_close(accommodation_cost(&stay(0, 1, 2000.0)), 0.0);
    }

    #[test]
    fn test_rooms_independent_of_travellers() {
        let mut trip = stay(4, 2, 1000.0);
        trip.travellers = 6;
        assert_close(accommodation_cost(&trip), 6000.0);
    }
}
