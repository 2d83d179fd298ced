pub mod kernel;
pub mod navigation;

pub use kernel::{Orientation, Segment, orientation, point_in_polygon, segment, segments_intersect};
pub use navigation::{COMPASS_HEADINGS, distance, in_region, is_close, is_hover, next_position};
