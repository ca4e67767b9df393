use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::money::parse_usd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Inactive,
    #[serde(rename = "VIP")]
    Vip,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
            CustomerStatus::Vip => "VIP",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(CustomerStatus::Active),
            "Inactive" => Some(CustomerStatus::Inactive),
            "VIP" => Some(CustomerStatus::Vip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: CustomerStatus,
    pub total_orders: u32,
    pub total_spent_cents: i64,
    pub join_date: NaiveDate,
    /// Display initials, e.g. "JS" for John Smith.
    pub avatar: String,
}

impl Customer {
    pub fn ingest(
        id: u32,
        name: &str,
        email: &str,
        phone: &str,
        status: CustomerStatus,
        total_orders: u32,
        total_spent: &str,
        join_date: &str,
    ) -> AppResult<Self> {
        let total_spent_cents = parse_usd(total_spent)?;
        let join_date = NaiveDate::parse_from_str(join_date, "%Y-%m-%d")
            .map_err(|e| AppError::BadRequest(format!("Invalid date '{}': {}", join_date, e)))?;

        let avatar: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase();

        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            status,
            total_orders,
            total_spent_cents,
            join_date,
            avatar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_derives_avatar_initials() {
        let customer = Customer::ingest(
            1,
            "John Smith",
            "john.smith@email.com",
            "+1 (555) 123-4567",
            CustomerStatus::Active,
            12,
            "$2,450",
            "2024-01-15",
        )
        .unwrap();

        assert_eq!(customer.avatar, "JS");
        assert_eq!(customer.total_spent_cents, 245000);
    }
}
