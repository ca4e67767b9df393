use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::money::parse_usd;

/// One row of the top-selling products table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSales {
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
    pub amount_cents: i64,
}

impl ProductSales {
    pub fn ingest(name: &str, price: &str, quantity: u32, amount: &str) -> AppResult<Self> {
        Ok(Self {
            name: name.to_string(),
            price_cents: parse_usd(price)?,
            quantity,
            amount_cents: parse_usd(amount)?,
        })
    }
}

/// One month of the revenue trend chart: the current period against the
/// previous one, in the chart's value domain (millions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub current: f64,
    pub previous: f64,
}

impl RevenuePoint {
    pub fn new(month: &str, current: f64, previous: f64) -> Self {
        Self {
            month: month.to_string(),
            current,
            previous,
        }
    }
}

/// One month of the projections-vs-actuals chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: String,
    pub actual: f64,
    pub projection: f64,
}

impl ProjectionPoint {
    pub fn new(month: &str, actual: f64, projection: f64) -> Self {
        Self {
            month: month.to_string(),
            actual,
            projection,
        }
    }
}

/// One slice of the sales-by-source donut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesShare {
    pub source: String,
    pub amount_cents: i64,
    pub percentage: f64,
}

impl SalesShare {
    pub fn ingest(source: &str, amount: &str, percentage: f64) -> AppResult<Self> {
        Ok(Self {
            source: source.to_string(),
            amount_cents: parse_usd(amount)?,
            percentage,
        })
    }
}

/// Revenue attributed to a city, with its share relative to the top city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRevenue {
    pub city: String,
    pub revenue_thousands: u32,
    pub percentage: f64,
}

impl LocationRevenue {
    pub fn new(city: &str, revenue_thousands: u32, percentage: f64) -> Self {
        Self {
            city: city.to_string(),
            revenue_thousands,
            percentage,
        }
    }
}
