use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    Amount,
    Customer,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

fn compare(a: &Order, b: &Order, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.amount_cents.cmp(&b.amount_cents),
        SortKey::Customer => a.customer.to_lowercase().cmp(&b.customer.to_lowercase()),
        SortKey::Status => a
            .status
            .as_str()
            .to_lowercase()
            .cmp(&b.status.as_str().to_lowercase()),
    }
}

/// Returns a new sequence ordered by the selected key; the input is left
/// untouched. The sort is stable, so equal keys keep their filtered order in
/// both directions (descending reverses the comparator, not the output).
pub fn sort_orders(orders: &[Order], key: SortKey, order: SortOrder) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    sorted
}
