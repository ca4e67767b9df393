pub mod donut;
pub mod line;

pub use donut::{donut_arcs, ArcSegment};
pub use line::{dashed_suffix_path, line_path, solid_prefix_path};
