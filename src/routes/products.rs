use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::format_usd;
use crate::routes::AppState;

#[derive(Serialize)]
pub struct TopSellingProduct {
    pub name: String,
    pub price_cents: i64,
    pub price: String,
    pub quantity: u32,
    pub amount_cents: i64,
    pub amount: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/products/top", get(top_selling))
}

async fn top_selling(State(state): State<AppState>) -> AppResult<Json<Vec<TopSellingProduct>>> {
    let products = state
        .catalog
        .top_products()
        .await?
        .into_iter()
        .map(|p| TopSellingProduct {
            name: p.name,
            price: format_usd(p.price_cents),
            price_cents: p.price_cents,
            quantity: p.quantity,
            amount: format_usd(p.amount_cents),
            amount_cents: p.amount_cents,
        })
        .collect();

    Ok(Json(products))
}
