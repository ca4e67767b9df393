use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::charts::{dashed_suffix_path, donut_arcs, line_path, solid_prefix_path, ArcSegment};
use crate::error::AppResult;
use crate::models::format_usd;
use crate::routes::AppState;

/// Value domain shared by the revenue and projection charts (millions).
const CHART_MAX_VALUE: f64 = 30.0;

#[derive(Serialize)]
pub struct RevenueChartResponse {
    pub months: Vec<String>,
    pub max_value: f64,
    /// Solid part of the current period, up to the cutoff month.
    pub current_solid: String,
    /// Dashed (projected) remainder of the current period.
    pub current_dashed: String,
    pub previous: String,
    pub cutoff_index: usize,
}

#[derive(Serialize)]
pub struct SalesChartResponse {
    pub segments: Vec<ArcSegment>,
    pub legend: Vec<SalesLegendRow>,
    pub total_percentage: f64,
}

#[derive(Serialize)]
pub struct SalesLegendRow {
    pub source: String,
    pub amount: String,
    pub percentage: f64,
}

#[derive(Serialize)]
pub struct ProjectionsChartResponse {
    pub months: Vec<String>,
    pub max_value: f64,
    pub bars: Vec<ProjectionBar>,
}

#[derive(Serialize)]
pub struct ProjectionBar {
    pub month: String,
    pub actual: f64,
    pub projection: f64,
    /// Bar heights as a share of the value domain, for the renderer.
    pub actual_pct: f64,
    pub projection_pct: f64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/charts/revenue", get(revenue_chart))
        .route("/charts/sales", get(sales_chart))
        .route("/charts/projections", get(projections_chart))
}

async fn revenue_chart(State(state): State<AppState>) -> AppResult<Json<RevenueChartResponse>> {
    let trend = state.catalog.revenue_trend().await?;

    let months: Vec<String> = trend.iter().map(|p| p.month.clone()).collect();
    let current: Vec<f64> = trend.iter().map(|p| p.current).collect();
    let previous: Vec<f64> = trend.iter().map(|p| p.previous).collect();

    // Solid through the midpoint of the period, dashed projection after it.
    let cutoff_index = trend.len() / 2;

    Ok(Json(RevenueChartResponse {
        months,
        max_value: CHART_MAX_VALUE,
        current_solid: solid_prefix_path(&current, CHART_MAX_VALUE, cutoff_index),
        current_dashed: dashed_suffix_path(&current, CHART_MAX_VALUE, cutoff_index),
        previous: line_path(&previous, CHART_MAX_VALUE),
        cutoff_index,
    }))
}

async fn sales_chart(State(state): State<AppState>) -> AppResult<Json<SalesChartResponse>> {
    let shares = state.catalog.sales_by_source().await?;

    let segments = donut_arcs(&shares);
    let total_percentage = shares.iter().map(|s| s.percentage).sum();
    let legend = shares
        .into_iter()
        .map(|s| SalesLegendRow {
            source: s.source,
            amount: format_usd(s.amount_cents),
            percentage: s.percentage,
        })
        .collect();

    Ok(Json(SalesChartResponse {
        segments,
        legend,
        total_percentage,
    }))
}

async fn projections_chart(
    State(state): State<AppState>,
) -> AppResult<Json<ProjectionsChartResponse>> {
    let points = state.catalog.projections().await?;

    let months: Vec<String> = points.iter().map(|p| p.month.clone()).collect();
    let bars = points
        .into_iter()
        .map(|p| ProjectionBar {
            actual_pct: p.actual / CHART_MAX_VALUE * 100.0,
            projection_pct: p.projection / CHART_MAX_VALUE * 100.0,
            month: p.month,
            actual: p.actual,
            projection: p.projection,
        })
        .collect();

    Ok(Json(ProjectionsChartResponse {
        months,
        max_value: CHART_MAX_VALUE,
        bars,
    }))
}
