mod analytics;
mod metrics;
mod seller;
mod transaction;

use crate::{middleware::metrics::track_metrics, state::AppState};
use anyhow::Result;
use axum::{
    Extension, Router, extract::DefaultBodyLimit, middleware::from_fn_with_state, routing::get,
};
use shared::{
    domain::{
        requests::{PaymentType, PeriodType, TransactionStatus},
        responses::{
            BestPeriodResponse, Pagination, SellerResponse, SellerStatsResponse,
            TransactionResponse,
        },
    },
    errors::ErrorResponse,
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::analytics::analytics_routes;
pub use self::metrics::metrics_handler;
pub use self::seller::seller_routes;
pub use self::transaction::transaction_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        seller::get_sellers,
        seller::get_seller,
        seller::create_seller,
        seller::update_seller,
        seller::delete_seller,

        transaction::get_transactions,
        transaction::get_transaction,
        transaction::create_transaction,
        transaction::complete_transaction,
        transaction::cancel_transaction,

        analytics::get_top_seller,
        analytics::get_sellers_below,
        analytics::get_best_period,
    ),
    components(schemas(
        ErrorResponse,
        Pagination,
        PaymentType,
        PeriodType,
        TransactionStatus,
        SellerResponse,
        TransactionResponse,
        SellerStatsResponse,
        BestPeriodResponse,
    )),
    tags(
        (name = "Seller", description = "Seller registration and management endpoints"),
        (name = "Transaction", description = "Sales transaction lifecycle endpoints"),
        (name = "Analytics", description = "Sales analytics over completed transactions"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    /// Full application router, ready to be served or driven in tests.
    pub fn build(app_state: AppState) -> Router {
        let metrics = app_state.metrics.clone();
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(seller_routes(shared_state.clone()))
            .merge(transaction_routes(shared_state.clone()))
            .merge(analytics_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .route("/metrics", get(metrics_handler))
            .layer(from_fn_with_state(metrics.clone(), track_metrics))
            .layer(Extension(metrics))
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📈 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
