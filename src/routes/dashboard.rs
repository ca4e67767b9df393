use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::format_usd;
use crate::query::{compute_stats, sort_orders, SortKey, SortOrder};
use crate::routes::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub processing_orders: usize,
    pub completed_orders: usize,
    pub total_revenue_cents: i64,
    pub total_revenue: f64,
    pub avg_order_value: f64,
    pub recent_orders: Vec<RecentOrder>,
    pub top_products: Vec<TopProductRow>,
    pub revenue_by_location: Vec<LocationRow>,
}

#[derive(Serialize)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub amount: String,
    pub status: String,
    pub date: String,
}

#[derive(Serialize)]
pub struct TopProductRow {
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub amount: String,
}

#[derive(Serialize)]
pub struct LocationRow {
    pub city: String,
    pub revenue: String,
    pub percentage: f64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let orders = state.catalog.orders().await?;
    let stats = compute_stats(&orders);

    let recent_orders: Vec<RecentOrder> = sort_orders(&orders, SortKey::Date, SortOrder::Desc)
        .into_iter()
        .take(5)
        .map(|o| RecentOrder {
            id: o.id,
            customer: o.customer,
            amount: format_usd(o.amount_cents),
            status: o.status.as_str().to_string(),
            date: o.date.to_string(),
        })
        .collect();

    let top_products: Vec<TopProductRow> = state
        .catalog
        .top_products()
        .await?
        .into_iter()
        .map(|p| TopProductRow {
            name: p.name,
            price: format_usd(p.price_cents),
            quantity: p.quantity,
            amount: format_usd(p.amount_cents),
        })
        .collect();

    let revenue_by_location: Vec<LocationRow> = state
        .catalog
        .revenue_by_location()
        .await?
        .into_iter()
        .map(|l| LocationRow {
            city: l.city,
            revenue: format!("{}K", l.revenue_thousands),
            percentage: l.percentage,
        })
        .collect();

    Ok(Json(DashboardResponse {
        total_orders: stats.total,
        pending_orders: stats.pending,
        processing_orders: stats.processing,
        completed_orders: stats.completed,
        total_revenue_cents: stats.total_revenue_cents,
        total_revenue: stats.total_revenue_cents as f64 / 100.0,
        avg_order_value: stats.avg_order_value_cents as f64 / 100.0,
        recent_orders,
        top_products,
        revenue_by_location,
    }))
}
