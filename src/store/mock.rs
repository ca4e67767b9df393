use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Customer, CustomerStatus, LocationRevenue, Order, OrderStatus, Priority, ProductSales,
    ProjectionPoint, RevenuePoint, SalesShare,
};
use crate::store::Catalog;

/// In-memory stand-in for the commerce API. All datasets are seeded once at
/// startup and never mutated; every accessor hands out a fresh copy.
pub struct MockCatalog {
    orders: Vec<Order>,
    customers: Vec<Customer>,
    top_products: Vec<ProductSales>,
    revenue_trend: Vec<RevenuePoint>,
    projections: Vec<ProjectionPoint>,
    sales_by_source: Vec<SalesShare>,
    revenue_by_location: Vec<LocationRevenue>,
}

impl MockCatalog {
    pub fn seed() -> AppResult<Self> {
        Ok(Self {
            orders: seed_orders()?,
            customers: seed_customers()?,
            top_products: seed_top_products()?,
            revenue_trend: seed_revenue_trend(),
            projections: seed_projections(),
            sales_by_source: seed_sales_by_source()?,
            revenue_by_location: seed_revenue_by_location(),
        })
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.clone())
    }

    async fn order(&self, id: &str) -> AppResult<Option<Order>> {
        Ok(self.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    async fn top_products(&self) -> AppResult<Vec<ProductSales>> {
        Ok(self.top_products.clone())
    }

    async fn revenue_trend(&self) -> AppResult<Vec<RevenuePoint>> {
        Ok(self.revenue_trend.clone())
    }

    async fn projections(&self) -> AppResult<Vec<ProjectionPoint>> {
        Ok(self.projections.clone())
    }

    async fn sales_by_source(&self) -> AppResult<Vec<SalesShare>> {
        Ok(self.sales_by_source.clone())
    }

    async fn revenue_by_location(&self) -> AppResult<Vec<LocationRevenue>> {
        Ok(self.revenue_by_location.clone())
    }
}

fn seed_orders() -> AppResult<Vec<Order>> {
    use OrderStatus::*;
    use Priority::*;

    let rows = [
        ("ORD-001", "John Smith", "john.smith@email.com", "Wireless Headphones", "$129.99", Completed, Medium, "2024-01-15"),
        ("ORD-002", "Sarah Johnson", "sarah.j@email.com", "Smart Watch", "$299.99", Processing, High, "2024-01-14"),
        ("ORD-003", "Mike Davis", "mike.davis@email.com", "Laptop Stand", "$49.99", Pending, Low, "2024-01-13"),
        ("ORD-004", "Emily Wilson", "emily.wilson@email.com", "Bluetooth Speaker", "$79.99", Completed, Medium, "2024-01-12"),
        ("ORD-005", "David Brown", "david.brown@email.com", "Phone Case", "$24.99", Cancelled, Low, "2024-01-11"),
        ("ORD-006", "Lisa Anderson", "lisa.anderson@email.com", "Tablet", "$399.99", Processing, High, "2024-01-10"),
        ("ORD-007", "Tom Miller", "tom.miller@email.com", "USB Cable", "$12.99", Completed, Low, "2024-01-09"),
        ("ORD-008", "Anna Garcia", "anna.garcia@email.com", "Wireless Mouse", "$35.99", Pending, Medium, "2024-01-08"),
        ("ORD-009", "Robert Taylor", "robert.taylor@email.com", "Monitor", "$249.99", Refunded, High, "2024-01-07"),
        ("ORD-010", "Jennifer Lee", "jennifer.lee@email.com", "Keyboard", "$89.99", Completed, Medium, "2024-01-06"),
        ("ORD-011", "Chris White", "chris.white@email.com", "Webcam", "$159.99", Processing, High, "2024-01-05"),
        ("ORD-012", "Maria Rodriguez", "maria.rodriguez@email.com", "Desk Lamp", "$45.99", Completed, Low, "2024-01-04"),
        ("ORD-013", "James Thompson", "james.thompson@email.com", "Gaming Chair", "$199.99", Pending, Medium, "2024-01-03"),
        ("ORD-014", "Laura Martinez", "laura.martinez@email.com", "External Hard Drive", "$129.99", Refunded, High, "2024-01-02"),
        ("ORD-015", "Kevin Clark", "kevin.clark@email.com", "Power Bank", "$29.99", Processing, Low, "2024-01-01"),
    ];

    rows.iter()
        .map(|(id, customer, email, product, amount, status, priority, date)| {
            Order::ingest(id, customer, email, product, amount, *status, *priority, date)
        })
        .collect()
}

fn seed_customers() -> AppResult<Vec<Customer>> {
    use CustomerStatus::*;

    let rows = [
        (1, "John Smith", "john.smith@email.com", "+1 (555) 123-4567", Active, 12, "$2,450", "2024-01-15"),
        (2, "Sarah Johnson", "sarah.j@email.com", "+1 (555) 234-5678", Active, 8, "$1,890", "2024-02-03"),
        (3, "Mike Davis", "mike.davis@email.com", "+1 (555) 345-6789", Inactive, 3, "$450", "2023-12-20"),
        (4, "Emily Wilson", "emily.wilson@email.com", "+1 (555) 456-7890", Active, 15, "$3,200", "2023-11-08"),
        (5, "David Brown", "david.brown@email.com", "+1 (555) 567-8901", Vip, 25, "$5,800", "2023-08-15"),
    ];

    rows.iter()
        .map(|(id, name, email, phone, status, total_orders, total_spent, join_date)| {
            Customer::ingest(*id, name, email, phone, *status, *total_orders, total_spent, join_date)
        })
        .collect()
}

fn seed_top_products() -> AppResult<Vec<ProductSales>> {
    let rows = [
        ("ASOS Ridley High Waist", "$79.49", 82, "$6,518.18"),
        ("Marco Lightweight Shirt", "$128.50", 37, "$4,754.50"),
        ("Half Sleeve Shirt", "$39.99", 64, "$2,559.36"),
        ("Lightweight Jacket", "$20.00", 184, "$3,680.00"),
        ("Marco Shoes", "$79.49", 64, "$1,965.81"),
    ];

    rows.iter()
        .map(|(name, price, quantity, amount)| ProductSales::ingest(name, price, *quantity, amount))
        .collect()
}

fn seed_revenue_trend() -> Vec<RevenuePoint> {
    vec![
        RevenuePoint::new("Jan", 12.0, 7.0),
        RevenuePoint::new("Feb", 8.0, 18.0),
        RevenuePoint::new("Mar", 6.0, 12.0),
        RevenuePoint::new("Apr", 10.0, 8.0),
        RevenuePoint::new("May", 16.0, 14.0),
        RevenuePoint::new("Jun", 20.0, 25.0),
    ]
}

fn seed_projections() -> Vec<ProjectionPoint> {
    vec![
        ProjectionPoint::new("Jan", 16.0, 20.0),
        ProjectionPoint::new("Feb", 20.0, 24.0),
        ProjectionPoint::new("Mar", 17.0, 21.0),
        ProjectionPoint::new("Apr", 21.0, 27.0),
        ProjectionPoint::new("May", 14.0, 18.0),
        ProjectionPoint::new("Jun", 20.0, 24.0),
    ]
}

fn seed_sales_by_source() -> AppResult<Vec<SalesShare>> {
    Ok(vec![
        SalesShare::ingest("Direct", "$300.56", 47.1)?,
        SalesShare::ingest("Affiliate", "$135.18", 21.1)?,
        SalesShare::ingest("Sponsored", "$154.02", 24.0)?,
        SalesShare::ingest("E-mail", "$48.96", 7.8)?,
    ])
}

fn seed_revenue_by_location() -> Vec<LocationRevenue> {
    vec![
        LocationRevenue::new("New York", 72, 100.0),
        LocationRevenue::new("San Francisco", 39, 54.0),
        LocationRevenue::new("Sydney", 25, 35.0),
        LocationRevenue::new("Singapore", 61, 85.0),
    ]
}

/// Well-formed sample dataset for unit tests.
#[cfg(test)]
pub fn sample_orders() -> Vec<Order> {
    seed_orders().expect("seed data parses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_is_well_formed() {
        let catalog = MockCatalog::seed().unwrap();
        assert_eq!(catalog.orders.len(), 15);
        assert_eq!(catalog.customers.len(), 5);
        assert_eq!(catalog.top_products.len(), 5);
        assert_eq!(catalog.revenue_trend.len(), 6);
    }

    #[test]
    fn order_ids_are_unique() {
        let orders = sample_orders();
        let mut ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }
}
