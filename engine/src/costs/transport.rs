use shared::models::{CarTransport, FareTransport, Transport, TransportDetails, TripParameters};
use shared::utils::round2;

/// Unrounded transport cost plus, for car trips, the fuel breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportCost {
    pub cost: f64,
    pub details: Option<TransportDetails>,
}

pub fn transport_cost(trip: &TripParameters) -> TransportCost {
    match &trip.transport {
        Transport::Train(fare) | Transport::Bus(fare) | Transport::Flight(fare) => TransportCost {
            cost: fare_cost(fare, trip.travellers),
            details: None,
        },
        Transport::Car(car) => car_cost(car),
    }
}

fn fare_cost(fare: &FareTransport, travellers: u32) -> f64 {
    let travellers = f64::from(travellers);
    fare.fare_per_person * travellers + fare.food_on_transport_per_person * travellers + fare.taxi_to_station
}

fn car_cost(car: &CarTransport) -> TransportCost {
    let distance = car.total_distance * if car.is_round_trip { 2.0 } else { 1.0 };
    // A zero (or unset) mileage means no fuel estimate rather than infinity.
    let fuel_litres = if car.car_average > 0.0 { distance / car.car_average } else { 0.0 };
    let fuel_cost = fuel_litres * car.fuel_price_per_litre;

    TransportCost {
        cost: fuel_cost + car.toll_parking + car.refreshments,
        details: Some(TransportDetails {
            fuel_litres: round2(fuel_litres),
            fuel_cost: round2(fuel_cost),
        }),
    }
}
