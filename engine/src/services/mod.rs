// Trip estimation services built on the cost functions.
pub mod comparator;
pub mod estimator;
pub mod report;
pub mod share;
pub mod validation;

pub use comparator::compare_trips;
pub use estimator::calculate_trip;
pub use validation::validate_trip;
