use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::analytics::DynAnalyticsService,
    domain::{
        requests::{BestPeriodQuery, SellersBelowQuery, TopSellerQuery},
        responses::{ApiResponse, BestPeriodResponse, SellerStatsResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/analytics/top-seller",
    tag = "Analytics",
    params(TopSellerQuery),
    responses(
        (status = 200, description = "Seller with the highest completed total in the period", body = ApiResponse<SellerStatsResponse>),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 404, description = "No completed transactions in the period", body = ErrorResponse)
    )
)]
pub async fn get_top_seller(
    Extension(service): Extension<DynAnalyticsService>,
    Query(params): Query<TopSellerQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .get_top_seller(params.period_type, params.date)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/analytics/sellers-below",
    tag = "Analytics",
    params(SellersBelowQuery),
    responses(
        (status = 200, description = "Sellers whose completed total is below the threshold", body = ApiResponse<Vec<SellerStatsResponse>>),
        (status = 400, description = "Malformed query or inverted window", body = ErrorResponse)
    )
)]
pub async fn get_sellers_below(
    Extension(service): Extension<DynAnalyticsService>,
    Query(params): Query<SellersBelowQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .get_sellers_below_total(params.from, params.to, params.max_total)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/analytics/sellers/{seller_id}/best-period",
    tag = "Analytics",
    params(
        ("seller_id" = i64, Path, description = "Seller ID"),
        BestPeriodQuery
    ),
    responses(
        (status = 200, description = "Seller's best period", body = ApiResponse<BestPeriodResponse>),
        (status = 404, description = "Seller missing or without completed transactions", body = ErrorResponse)
    )
)]
pub async fn get_best_period(
    Extension(service): Extension<DynAnalyticsService>,
    Path(seller_id): Path<i64>,
    Query(params): Query<BestPeriodQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .get_best_period_for_seller(seller_id, params.period_type)
        .await?;
    Ok(Json(response))
}

pub fn analytics_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/analytics/top-seller", get(get_top_seller))
        .route("/api/analytics/sellers-below", get(get_sellers_below))
        .route(
            "/api/analytics/sellers/{seller_id}/best-period",
            get(get_best_period),
        )
        .layer(Extension(app_state.di_container.analytics.clone()))
}
