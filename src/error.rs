use crate::domain::LngLat;

/// Failures that abort planning for a single order
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid heading {0}: must be 999 or a multiple of 22.5 in [0, 360]")]
    InvalidHeading(f64),

    #[error("Order {0} cannot be associated with any available restaurant")]
    UnresolvableRestaurant(String),

    #[error("No legal heading from {at:?} after {steps} steps")]
    PlanningExhausted { steps: usize, at: LngLat },
}

pub type Result<T> = std::result::Result<T, PlanError>;
