pub mod cache;
pub mod manager;
pub mod movement;
pub mod search;

pub use cache::{PathCache, RouteKey};
pub use manager::{FailedOrder, PathManager, RoutePlan};
pub use movement::Movement;
pub use search::{Airspace, CentralAreaRule, PathSearch, mirror_leg};
