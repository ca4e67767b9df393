pub mod customer;
pub mod metrics;
pub mod money;
pub mod order;

pub use customer::{Customer, CustomerStatus};
pub use metrics::{LocationRevenue, ProductSales, ProjectionPoint, RevenuePoint, SalesShare};
pub use money::{format_usd, parse_usd};
pub use order::{Order, OrderStatus, Priority};
