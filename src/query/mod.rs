pub mod filter;
pub mod paginate;
pub mod sort;
pub mod stats;

pub use filter::filter_orders;
pub use paginate::{paginate, Page};
pub use sort::{sort_orders, SortKey, SortOrder};
pub use stats::{compute_stats, OrderStats};
