use crate::models::{Order, OrderStatus, Priority};

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Narrows the dataset to records matching the free-text search and the
/// categorical filters. `None` for status or priority is the "All" sentinel.
///
/// The search term matches against customer, id, product, and email; the
/// categorical filters are exact. Input order is preserved, and an empty
/// result is an empty vec, not an error.
pub fn filter_orders(
    orders: &[Order],
    search: &str,
    status: Option<OrderStatus>,
    priority: Option<Priority>,
) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| {
            let matches_search = contains_ci(&order.customer, search)
                || contains_ci(&order.id, search)
                || contains_ci(&order.product, search)
                || contains_ci(&order.email, search);

            let matches_status = status.is_none_or(|s| order.status == s);
            let matches_priority = priority.is_none_or(|p| order.priority == p);

            matches_search && matches_status && matches_priority
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::sample_orders;

    #[test]
    fn empty_search_and_all_filters_match_everything() {
        let orders = sample_orders();
        let filtered = filter_orders(&orders, "", None, None);
        assert_eq!(filtered.len(), orders.len());
    }

    #[test]
    fn status_filter_selects_completed_orders() {
        let orders = sample_orders();
        let filtered = filter_orders(&orders, "", Some(OrderStatus::Completed), None);

        let ids: Vec<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-001", "ORD-004", "ORD-007", "ORD-010", "ORD-012"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let orders = sample_orders();

        // "john" hits John Smith's customer/email fields and Sarah Johnson's
        // surname, both by the substring rule.
        let filtered = filter_orders(&orders, "john", None, None);
        let ids: Vec<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-001", "ORD-002"]);

        // An email-only term.
        let filtered = filter_orders(&orders, "JOHN.SMITH@", None, None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "ORD-001");

        // Product match.
        let filtered = filter_orders(&orders, "wireless", None, None);
        let ids: Vec<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-001", "ORD-008"]);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let orders = sample_orders();
        let filtered = filter_orders(
            &orders,
            "",
            Some(OrderStatus::Processing),
            Some(Priority::High),
        );
        let ids: Vec<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-002", "ORD-006", "ORD-011"]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let orders = sample_orders();
        let filtered = filter_orders(&orders, "no such thing", None, None);
        assert!(filtered.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let orders = sample_orders();
        let once = filter_orders(&orders, "a", Some(OrderStatus::Pending), None);
        let twice = filter_orders(&once, "a", Some(OrderStatus::Pending), None);

        let once_ids: Vec<&str> = once.iter().map(|o| o.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }
}
