pub mod lnglat;
pub mod order;
pub mod region;
pub mod restaurant;

pub use lnglat::{LngLat, PointKey};
pub use order::{CreditCardInformation, Order, OrderStatus, OrderValidationCode};
pub use region::NamedRegion;
pub use restaurant::{DayOfWeek, Pizza, Restaurant};
