use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::money::parse_usd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(OrderStatus::Pending),
            "Processing" => Some(OrderStatus::Processing),
            "Completed" => Some(OrderStatus::Completed),
            "Cancelled" => Some(OrderStatus::Cancelled),
            "Refunded" => Some(OrderStatus::Refunded),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub email: String,
    pub product: String,
    pub amount_cents: i64,
    pub status: OrderStatus,
    pub priority: Priority,
    pub date: NaiveDate,
}

impl Order {
    /// Builds an order from the upstream wire shape, where the amount is a
    /// formatted currency string and the date is `YYYY-MM-DD`. Malformed
    /// records are rejected here rather than tolerated downstream.
    #[allow(clippy::too_many_arguments)]
    pub fn ingest(
        id: &str,
        customer: &str,
        email: &str,
        product: &str,
        amount: &str,
        status: OrderStatus,
        priority: Priority,
        date: &str,
    ) -> AppResult<Self> {
        let amount_cents = parse_usd(amount)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| AppError::BadRequest(format!("Invalid date '{}': {}", date, e)))?;

        Ok(Self {
            id: id.to_string(),
            customer: customer.to_string(),
            email: email.to_string(),
            product: product.to_string(),
            amount_cents,
            status,
            priority,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_parses_amount_and_date() {
        let order = Order::ingest(
            "ORD-001",
            "John Smith",
            "john.smith@email.com",
            "Wireless Headphones",
            "$129.99",
            OrderStatus::Completed,
            Priority::Medium,
            "2024-01-15",
        )
        .unwrap();

        assert_eq!(order.amount_cents, 12999);
        assert_eq!(order.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn ingest_rejects_malformed_records() {
        let bad_amount = Order::ingest(
            "ORD-900", "X", "x@email.com", "Y", "129.99",
            OrderStatus::Pending, Priority::Low, "2024-01-15",
        );
        assert!(bad_amount.is_err());

        let bad_date = Order::ingest(
            "ORD-901", "X", "x@email.com", "Y", "$129.99",
            OrderStatus::Pending, Priority::Low, "01/15/2024",
        );
        assert!(bad_date.is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ] {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_str("Shipped"), None);
    }
}
