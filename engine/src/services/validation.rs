use crate::error::EngineError;
use shared::models::TripParameters;

/// Rejects trips the cost functions cannot give a meaningful answer for:
/// zero counts, and negative or non-finite amounts.
pub fn validate_trip(trip: &TripParameters) -> Result<(), EngineError> {
    let counts = [
        ("travellers", trip.travellers),
        ("days", trip.days),
        ("numberOfRooms", trip.number_of_rooms),
    ];
    if let Some((name, _)) = counts.iter().find(|(_, count)| *count == 0) {
        return Err(EngineError::InvalidTrip(format!("{} must be at least 1", name)));
    }

    for (name, amount) in trip.amounts() {
        if !amount.is_finite() || amount < 0.0 {
            return Err(EngineError::InvalidTrip(format!(
                "{} must be a non-negative number, got {}",
                name, amount
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::estimator::tests::{goa_trip, road_trip};
    use shared::models::{CarTransport, Transport};

    #[test]
    fn test_valid_trips_pass() {
        assert!(validate_trip(&goa_trip()).is_ok());
        assert!(validate_trip(&road_trip()).is_ok());
    }

    #[test]
    fn test_zero_travellers_rejected() {
        let mut trip = goa_trip();
        trip.travellers = 0;
        let err = validate_trip(&trip).unwrap_err();
        assert_eq!(err.to_string(), "Invalid trip: travellers must be at least 1");
    }

    #[test]
    fn test_zero_rooms_rejected() {
        let mut trip = goa_trip();
        trip.number_of_rooms = 0;
        assert!(matches!(validate_trip(&trip), Err(EngineError::InvalidTrip(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut trip = goa_trip();
        trip.operational.shopping = -10.0;
        let err = validate_trip(&trip).unwrap_err();
        assert!(err.to_string().contains("shopping"));
    }

    #[test]
    fn test_nan_car_average_rejected() {
        let mut trip = road_trip();
        trip.transport = Transport::Car(CarTransport {
            car_average: f64::NAN,
            ..CarTransport::default()
        });
        assert!(validate_trip(&trip).is_err());
    }

    #[test]
    fn test_zero_car_average_allowed() {
        let mut trip = road_trip();
        trip.transport = Transport::Car(CarTransport::default());
        assert!(validate_trip(&trip).is_ok());
    }
}
