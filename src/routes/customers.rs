use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{format_usd, Customer, CustomerStatus};
use crate::query::{filter::contains_ci, paginate, Page};
use crate::routes::AppState;

#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: CustomerStatus,
    pub total_orders: u32,
    pub total_spent_cents: i64,
    pub total_spent: String,
    pub join_date: String,
    pub avatar: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            status: c.status,
            total_orders: c.total_orders,
            total_spent_cents: c.total_spent_cents,
            total_spent: format_usd(c.total_spent_cents),
            join_date: c.join_date.to_string(),
            avatar: c.avatar,
        }
    }
}

#[derive(Deserialize)]
pub struct ListCustomersQuery {
    #[serde(default)]
    pub q: String,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/customers", get(list_customers))
}

async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<ListCustomersQuery>,
) -> AppResult<Json<Page<CustomerResponse>>> {
    let status = match params.status.as_deref() {
        None | Some("All") => None,
        Some(s) => Some(
            CustomerStatus::from_str(s)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid status: {}", s)))?,
        ),
    };

    let customers = state.catalog.customers().await?;
    let filtered: Vec<Customer> = customers
        .into_iter()
        .filter(|c| {
            let matches_search =
                contains_ci(&c.name, &params.q) || contains_ci(&c.email, &params.q);
            let matches_status = status.is_none_or(|s| c.status == s);
            matches_search && matches_status
        })
        .collect();

    let per_page = params.per_page.unwrap_or(state.config.default_per_page);
    if per_page == 0 {
        return Err(AppError::BadRequest("per_page must be positive".to_string()));
    }

    let page = paginate(&filtered, per_page, params.page.unwrap_or(1));
    Ok(Json(page.map(CustomerResponse::from)))
}
