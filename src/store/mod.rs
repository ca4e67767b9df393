pub mod mock;

pub use mock::MockCatalog;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Customer, LocationRevenue, Order, ProductSales, ProjectionPoint, RevenuePoint, SalesShare,
};

/// Read-only data source behind the dashboard. The bundled implementation is
/// an in-memory mock; a real deployment would back this with the commerce
/// API, which is why the surface is async.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn orders(&self) -> AppResult<Vec<Order>>;
    async fn order(&self, id: &str) -> AppResult<Option<Order>>;
    async fn customers(&self) -> AppResult<Vec<Customer>>;
    async fn top_products(&self) -> AppResult<Vec<ProductSales>>;
    async fn revenue_trend(&self) -> AppResult<Vec<RevenuePoint>>;
    async fn projections(&self) -> AppResult<Vec<ProjectionPoint>>;
    async fn sales_by_source(&self) -> AppResult<Vec<SalesShare>>;
    async fn revenue_by_location(&self) -> AppResult<Vec<LocationRevenue>>;
}
