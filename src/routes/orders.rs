use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{format_usd, Order, OrderStatus, Priority};
use crate::query::{compute_stats, filter_orders, paginate, sort_orders, Page, SortKey, SortOrder};
use crate::routes::AppState;

const MAX_PER_PAGE: usize = 100;

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer: String,
    pub email: String,
    pub product: String,
    pub amount_cents: i64,
    pub amount: String,
    pub status: OrderStatus,
    pub priority: Priority,
    pub date: NaiveDate,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer: order.customer,
            email: order.email,
            product: order.product,
            amount_cents: order.amount_cents,
            amount: format_usd(order.amount_cents),
            status: order.status,
            priority: order.priority,
            date: order.date,
        }
    }
}

#[derive(Serialize)]
pub struct OrderStatsResponse {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub total_revenue_cents: i64,
    pub total_revenue: f64,
    pub avg_order_value_cents: i64,
    pub avg_order_value: f64,
}

#[derive(Deserialize)]
pub struct ListOrdersQuery {
    #[serde(default)]
    pub q: String,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/stats", get(order_stats))
        .route("/orders/{id}", get(get_order))
}

/// The "All" sentinel (or an absent parameter) disables a categorical
/// filter; anything else must name a member of the closed set.
fn parse_status(param: Option<&str>) -> AppResult<Option<OrderStatus>> {
    match param {
        None | Some("All") | Some("All Status") => Ok(None),
        Some(s) => OrderStatus::from_str(s)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid status: {}", s))),
    }
}

fn parse_priority(param: Option<&str>) -> AppResult<Option<Priority>> {
    match param {
        None | Some("All") | Some("All Priority") => Ok(None),
        Some(s) => Priority::from_str(s)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid priority: {}", s))),
    }
}

async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersQuery>,
) -> AppResult<Json<Page<OrderResponse>>> {
    let status = parse_status(params.status.as_deref())?;
    let priority = parse_priority(params.priority.as_deref())?;

    let per_page = params.per_page.unwrap_or(state.config.default_per_page);
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(AppError::BadRequest(format!(
            "per_page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }

    // The screens open on newest-first.
    let sort_by = params.sort_by.unwrap_or(SortKey::Date);
    let sort_order = params.sort_order.unwrap_or(SortOrder::Desc);
    let page = params.page.unwrap_or(1);

    let orders = state.catalog.orders().await?;
    let filtered = filter_orders(&orders, &params.q, status, priority);
    let sorted = sort_orders(&filtered, sort_by, sort_order);
    let page = paginate(&sorted, per_page, page);

    Ok(Json(page.map(OrderResponse::from)))
}

async fn order_stats(State(state): State<AppState>) -> AppResult<Json<OrderStatsResponse>> {
    let orders = state.catalog.orders().await?;
    let stats = compute_stats(&orders);

    Ok(Json(OrderStatsResponse {
        total: stats.total,
        pending: stats.pending,
        processing: stats.processing,
        completed: stats.completed,
        total_revenue_cents: stats.total_revenue_cents,
        total_revenue: stats.total_revenue_cents as f64 / 100.0,
        avg_order_value_cents: stats.avg_order_value_cents,
        avg_order_value: stats.avg_order_value_cents as f64 / 100.0,
    }))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderResponse>> {
    let order = state
        .catalog
        .order(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(Json(OrderResponse::from(order)))
}
