// Per-category cost functions. Each one is pure and reads only the trip
// fields relevant to its category; results are unrounded.
pub mod accommodation;
pub mod daily;
pub mod food;
pub mod operational;
pub mod transport;

pub use accommodation::accommodation_cost;
pub use daily::{local_transport_cost, misc_cost, sightseeing_cost};
pub use food::food_cost;
pub use operational::operational_cost;
pub use transport::{transport_cost, TransportCost};

#[cfg(test)]
pub(crate) mod test_support {
    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Mismatch: {} != {}",
            actual,
            expected
        );
    }
}
