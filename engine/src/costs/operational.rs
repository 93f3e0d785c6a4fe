use shared::models::TripParameters;

pub fn operational_cost(trip: &TripParameters) -> f64 {
    let ops = &trip.operational;
    ops.visa_fees + ops.sim_internet + ops.shopping + ops.travel_insurance + ops.other_operational
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::test_support::assert_close;
    use shared::models::OperationalCosts;

    #[test]
    fn test_sums_add_ons_regardless_of_days() {
        let trip = TripParameters {
            days: 10,
            travellers: 4,
            operational: OperationalCosts {
                visa_fees: 2500.0,
                sim_internet: 499.5,
                shopping: 3000.0,
                travel_insurance: 800.0,
                other_operational: 0.5,
            },
            ..TripParameters::default()
        };
        assert_close(operational_cost(&trip), 6800.0);
    }

    #[test]
    fn test_absent_add_ons_are_zero() {
        assert_close(operational_cost(&TripParameters::default()), 0.0);
    }
}
