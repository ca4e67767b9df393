use serde::Serialize;

use crate::models::{Order, OrderStatus};

/// Summary figures over the full dataset, independent of any active filter.
#[derive(Debug, Clone, Serialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub total_revenue_cents: i64,
    pub avg_order_value_cents: i64,
}

/// Scans the dataset once. Revenue counts only completed orders; the average
/// is zero when nothing is completed rather than a division error.
pub fn compute_stats(orders: &[Order]) -> OrderStats {
    let mut stats = OrderStats {
        total: orders.len(),
        pending: 0,
        processing: 0,
        completed: 0,
        total_revenue_cents: 0,
        avg_order_value_cents: 0,
    };

    for order in orders {
        match order.status {
            OrderStatus::Pending => stats.pending += 1,
            OrderStatus::Processing => stats.processing += 1,
            OrderStatus::Completed => {
                stats.completed += 1;
                stats.total_revenue_cents += order.amount_cents;
            }
            OrderStatus::Cancelled | OrderStatus::Refunded => {}
        }
    }

    if stats.completed > 0 {
        stats.avg_order_value_cents = stats.total_revenue_cents / stats.completed as i64;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::store::mock::sample_orders;

    #[test]
    fn sample_dataset_totals() {
        let orders = sample_orders();
        let stats = compute_stats(&orders);

        assert_eq!(stats.total, 15);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.processing, 4);
        assert_eq!(stats.completed, 5);
        // 129.99 + 79.99 + 12.99 + 89.99 + 45.99
        assert_eq!(stats.total_revenue_cents, 35895);
        assert_eq!(stats.avg_order_value_cents, 7179);
    }

    #[test]
    fn counted_statuses_never_exceed_total() {
        let orders = sample_orders();
        let stats = compute_stats(&orders);
        assert!(stats.pending + stats.processing + stats.completed <= stats.total);
    }

    #[test]
    fn empty_dataset_is_all_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_revenue_cents, 0);
        assert_eq!(stats.avg_order_value_cents, 0);
    }

    #[test]
    fn zero_completed_orders_yield_zero_average() {
        let order = Order::ingest(
            "ORD-100",
            "Jane Doe",
            "jane@email.com",
            "Mug",
            "$10.00",
            OrderStatus::Cancelled,
            Priority::Low,
            "2024-02-01",
        )
        .unwrap();

        let stats = compute_stats(&[order]);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.total_revenue_cents, 0);
        assert_eq!(stats.avg_order_value_cents, 0);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let orders = sample_orders();
        let a = compute_stats(&orders);
        let b = compute_stats(&orders);
        assert_eq!(a.total_revenue_cents, b.total_revenue_cents);
        assert_eq!(a.avg_order_value_cents, b.avg_order_value_cents);
    }
}
