use crate::costs;
use shared::models::{CalculationResult, TripParameters};
use shared::utils::round2;

/// Runs every cost function once and assembles the rounded result.
///
/// Intermediate sums stay unrounded; each output field is rounded on its
/// own, so the total can differ from the sum of rounded categories by a
/// cent. Per-person cost divides by at least one traveller.
pub fn calculate_trip(trip: &TripParameters) -> CalculationResult {
    let transport = costs::transport_cost(trip);
    let accommodation = costs::accommodation_cost(trip);
    let food = costs::food_cost(trip);
    let local_transport = costs::local_transport_cost(trip);
    let sightseeing = costs::sightseeing_cost(trip);
    let misc = costs::misc_cost(trip);
    let operational = costs::operational_cost(trip);

    let total = transport.cost + accommodation + food + local_transport + sightseeing + misc + operational;
    let per_person = total / f64::from(trip.travellers.max(1));

    tracing::debug!(
        destination = %trip.destination,
        mode = trip.transport.mode().label(),
        travellers = trip.travellers,
        days = trip.days,
        total,
        "Calculated trip"
    );

    CalculationResult {
        transport_cost: round2(transport.cost),
        accommodation_cost: round2(accommodation),
        food_cost: round2(food),
        local_transport_cost: round2(local_transport),
        sightseeing_cost: round2(sightseeing),
        misc_cost: round2(misc),
        operational_cost: round2(operational),
        total_cost: round2(total),
        cost_per_person: round2(per_person),
        transport_details: transport.details,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::models::{CarTransport, FareTransport, OperationalCosts, Transport, TransportDetails};

    pub(crate) fn goa_trip() -> TripParameters {
        TripParameters {
            destination: "Goa".to_string(),
            trip_label: None,
            travellers: 2,
            days: 3,
            transport: Transport::Train(FareTransport {
                fare_per_person: 1200.0,
                food_on_transport_per_person: 100.0,
                taxi_to_station: 300.0,
            }),
            hotel_rate_per_night: 2000.0,
            number_of_rooms: 1,
            meals_per_day: 500.0,
            meals_is_per_person: true,
            local_transport_per_day: 200.0,
            sightseeing_per_day: 300.0,
            misc_per_day: 100.0,
            operational: OperationalCosts::default(),
        }
    }

    pub(crate) fn road_trip() -> TripParameters {
        TripParameters {
            destination: "Lonavala".to_string(),
            travellers: 3,
            days: 1,
            transport: Transport::Car(CarTransport {
                total_distance: 100.0,
                car_average: 15.0,
                fuel_price_per_litre: 100.0,
                toll_parking: 50.0,
                refreshments: 200.0,
                is_round_trip: true,
            }),
            ..TripParameters::default()
        }
    }

    fn reassembled(result: &CalculationResult) -> f64 {
        round2(result.categories().map(|(_, v)| v).sum())
    }

    #[test]
    fn test_goa_scenario() {
        let result = calculate_trip(&goa_trip());
        assert_eq!(result.transport_cost, 2900.0);
        assert_eq!(result.accommodation_cost, 4000.0);
        assert_eq!(result.food_cost, 3000.0);
        assert_eq!(result.local_transport_cost, 600.0);
        assert_eq!(result.sightseeing_cost, 900.0);
        assert_eq!(result.misc_cost, 300.0);
        assert_eq!(result.operational_cost, 0.0);
        assert_eq!(result.total_cost, 11700.0);
        assert_eq!(result.cost_per_person, 5850.0);
        assert_eq!(result.transport_details, None);
    }

    #[test]
    fn test_car_scenario() {
        let result = calculate_trip(&road_trip());
        assert_eq!(result.transport_cost, 1583.33);
        assert_eq!(
            result.transport_details,
            Some(TransportDetails { fuel_litres: 13.33, fuel_cost: 1333.33 })
        );
        assert_eq!(result.total_cost, 1583.33);
        assert_eq!(result.cost_per_person, 527.78);
    }

    #[test]
    fn test_car_fields_ignored_for_bus() {
        let mut trip = goa_trip();
        trip.transport = Transport::Bus(FareTransport {
            fare_per_person: 800.0,
            ..FareTransport::default()
        });
        let result = calculate_trip(&trip);
        assert_eq!(result.transport_cost, 1600.0);
        assert_eq!(result.transport_details, None);
    }

    #[test]
    fn test_total_reassembles_within_a_cent() {
        let mut trip = road_trip();
        trip.days = 4;
        trip.hotel_rate_per_night = 1999.995;
        trip.meals_per_day = 333.333;
        trip.misc_per_day = 0.125;
        trip.operational.sim_internet = 0.005;

        for trip in [goa_trip(), road_trip(), trip] {
            let result = calculate_trip(&trip);
            assert!(
                (result.total_cost - reassembled(&result)).abs() <= 0.01 * 7.0,
                "total {} vs categories {}",
                result.total_cost,
                reassembled(&result)
            );
        }
    }

    #[test]
    fn test_per_person_times_travellers_close_to_total() {
        let mut trip = road_trip();
        trip.travellers = 7;
        let result = calculate_trip(&trip);
        let tolerance = 0.01 * f64::from(trip.travellers);
        assert!((result.cost_per_person * 7.0 - result.total_cost).abs() <= tolerance);
    }

    #[test]
    fn test_all_costs_non_negative() {
        let trips = [goa_trip(), road_trip(), TripParameters::default()];
        for trip in trips.iter() {
            let result = calculate_trip(trip);
            assert!(result.categories().all(|(_, v)| v >= 0.0));
            assert!(result.total_cost >= 0.0);
            assert!(result.cost_per_person >= 0.0);
        }
    }

    #[test]
    fn test_zero_travellers_does_not_divide_by_zero() {
        let mut trip = goa_trip();
        trip.travellers = 0;
        let result = calculate_trip(&trip);
        assert!(result.cost_per_person.is_finite());
        assert_eq!(result.cost_per_person, result.total_cost);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(calculate_trip(&goa_trip()), calculate_trip(&goa_trip()));
    }
}
