use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the caller knows about one trip. Only the fields of the
/// selected transport variant are ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_label: Option<String>,
    pub travellers: u32,
    pub days: u32,

    #[serde(flatten)]
    pub transport: Transport,

    pub hotel_rate_per_night: f64,
    pub number_of_rooms: u32,

    pub meals_per_day: f64,
    pub meals_is_per_person: bool,
    pub local_transport_per_day: f64,
    pub sightseeing_per_day: f64,
    pub misc_per_day: f64,

    #[serde(flatten)]
    pub operational: OperationalCosts,
}

impl Default for TripParameters {
    fn default() -> Self {
        TripParameters {
            destination: String::new(),
            trip_label: None,
            travellers: 2,
            days: 3,
            transport: Transport::Train(FareTransport::default()),
            hotel_rate_per_night: 0.0,
            number_of_rooms: 1,
            meals_per_day: 0.0,
            meals_is_per_person: true,
            local_transport_per_day: 0.0,
            sightseeing_per_day: 0.0,
            misc_per_day: 0.0,
            operational: OperationalCosts::default(),
        }
    }
}

impl TripParameters {
    /// Every monetary input paired with its wire name, for range checks.
    pub fn amounts(&self) -> Vec<(&'static str, f64)> {
        let mut amounts = match &self.transport {
            Transport::Train(fare) | Transport::Bus(fare) | Transport::Flight(fare) => vec![
                ("farePerPerson", fare.fare_per_person),
                ("foodOnTransportPerPerson", fare.food_on_transport_per_person),
                ("taxiToStation", fare.taxi_to_station),
            ],
            Transport::Car(car) => vec![
                ("totalDistance", car.total_distance),
                ("carAverage", car.car_average),
                ("fuelPricePerLitre", car.fuel_price_per_litre),
                ("tollParking", car.toll_parking),
                ("refreshments", car.refreshments),
            ],
        };
        amounts.extend([
            ("hotelRatePerNight", self.hotel_rate_per_night),
            ("mealsPerDay", self.meals_per_day),
            ("localTransportPerDay", self.local_transport_per_day),
            ("sightseeingPerDay", self.sightseeing_per_day),
            ("miscPerDay", self.misc_per_day),
            ("visaFees", self.operational.visa_fees),
            ("simInternet", self.operational.sim_internet),
            ("shopping", self.operational.shopping),
            ("travelInsurance", self.operational.travel_insurance),
            ("otherOperational", self.operational.other_operational),
        ]);
        amounts
    }
}

/// How the travellers get to the destination. Serialized inline with the
/// trip under the `transportMode` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "transportMode", rename_all = "lowercase")]
pub enum Transport {
    Train(FareTransport),
    Bus(FareTransport),
    Flight(FareTransport),
    Car(CarTransport),
}

impl Transport {
    pub fn mode(&self) -> TransportMode {
        match self {
            Transport::Train(_) => TransportMode::Train,
            Transport::Bus(_) => TransportMode::Bus,
            Transport::Flight(_) => TransportMode::Flight,
            Transport::Car(_) => TransportMode::Car,
        }
    }
}

/// Ticketed travel (train, bus, flight). Absent fields are 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareTransport {
    #[serde(default)]
    pub fare_per_person: f64,
    #[serde(default)]
    pub food_on_transport_per_person: f64,
    #[serde(default)]
    pub taxi_to_station: f64,
}

/// Self-driven travel. `car_average` is distance per litre of fuel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarTransport {
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub car_average: f64,
    #[serde(default)]
    pub fuel_price_per_litre: f64,
    #[serde(default)]
    pub toll_parking: f64,
    #[serde(default)]
    pub refreshments: f64,
    #[serde(default)]
    pub is_round_trip: bool,
}

/// Flat add-ons, independent of days and travellers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalCosts {
    #[serde(default)]
    pub visa_fees: f64,
    #[serde(default)]
    pub sim_internet: f64,
    #[serde(default)]
    pub shopping: f64,
    #[serde(default)]
    pub travel_insurance: f64,
    #[serde(default)]
    pub other_operational: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Train,
    Bus,
    Flight,
    Car,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
            TransportMode::Flight => "Flight",
            TransportMode::Car => "Car",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
    Transport,
    Accommodation,
    Food,
    LocalTransport,
    Sightseeing,
    Misc,
    Operational,
}

impl CostCategory {
    /// Display order used by every breakdown and comparison table.
    pub const ALL: [CostCategory; 7] = [
        CostCategory::Transport,
        CostCategory::Accommodation,
        CostCategory::Food,
        CostCategory::LocalTransport,
        CostCategory::Sightseeing,
        CostCategory::Misc,
        CostCategory::Operational,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Transport => "Transport",
            CostCategory::Accommodation => "Accommodation",
            CostCategory::Food => "Food & Drinks",
            CostCategory::LocalTransport => "Local Transport",
            CostCategory::Sightseeing => "Sightseeing",
            CostCategory::Misc => "Miscellaneous",
            CostCategory::Operational => "Operational",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fuel figures for car trips, each rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDetails {
    pub fuel_litres: f64,
    pub fuel_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub transport_cost: f64,
    pub accommodation_cost: f64,
    pub food_cost: f64,
    pub local_transport_cost: f64,
    pub sightseeing_cost: f64,
    pub misc_cost: f64,
    pub operational_cost: f64,
    pub total_cost: f64,
    pub cost_per_person: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_details: Option<TransportDetails>,
}

impl CalculationResult {
    pub fn amount(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Transport => self.transport_cost,
            CostCategory::Accommodation => self.accommodation_cost,
            CostCategory::Food => self.food_cost,
            CostCategory::LocalTransport => self.local_transport_cost,
            CostCategory::Sightseeing => self.sightseeing_cost,
            CostCategory::Misc => self.misc_cost,
            CostCategory::Operational => self.operational_cost,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL.into_iter().map(move |c| (c, self.amount(c)))
    }

    /// Percentage of the total spent on `category`; 0 for an empty trip.
    pub fn share_of_total(&self, category: CostCategory) -> f64 {
        if self.total_cost > 0.0 {
            self.amount(category) / self.total_cost * 100.0
        } else {
            0.0
        }
    }

    /// The most expensive category. Earlier categories win ties.
    pub fn highest_category(&self) -> Option<(CostCategory, f64)> {
        if self.total_cost <= 0.0 {
            return None;
        }
        self.categories()
            .fold(None, |best: Option<(CostCategory, f64)>, (category, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((category, value)),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cheaper {
    Trip1,
    Trip2,
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripComparison {
    pub trip1_result: CalculationResult,
    pub trip2_result: CalculationResult,
    pub cheaper: Cheaper,
    pub difference: f64,
    pub percentage_difference: f64,
}

/// One line of the side-by-side table. `diff` is trip 1 minus trip 2, so a
/// negative value means trip 1 spends less in that category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDifference {
    pub category: CostCategory,
    pub value1: f64,
    pub value2: f64,
    pub diff: f64,
}

impl TripComparison {
    /// Per-category rows, skipping categories neither trip spends on.
    pub fn category_rows(&self) -> Vec<CategoryDifference> {
        CostCategory::ALL
            .iter()
            .map(|category| {
                let value1 = self.trip1_result.amount(*category);
                let value2 = self.trip2_result.amount(*category);
                CategoryDifference {
                    category: *category,
                    value1,
                    value2,
                    diff: crate::utils::round2(value1 - value2),
                }
            })
            .filter(|row| row.value1 > 0.0 || row.value2 > 0.0)
            .collect()
    }
}

/// A named snapshot of trip parameters as kept by the trip store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTripRecord {
    pub id: String,
    pub name: String,
    pub data: TripParameters,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
