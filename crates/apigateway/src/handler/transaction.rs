use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::transaction::service::{
        DynTransactionCommandService, DynTransactionQueryService,
    },
    domain::{
        requests::{CreateTransactionRequest, FindAllTransactions},
        responses::{ApiResponse, ApiResponsePagination, TransactionResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transaction",
    params(FindAllTransactions),
    responses(
        (status = 200, description = "Page of transactions", body = ApiResponsePagination<Vec<TransactionResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_transactions(
    Extension(service): Extension<DynTransactionQueryService>,
    Query(params): Query<FindAllTransactions>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = "Transaction",
    params(("id" = i64, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction details", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
pub async fn get_transaction(
    Extension(service): Extension<DynTransactionQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Transaction",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Pending transaction created", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 422, description = "Seller missing or deleted", body = ErrorResponse)
    )
)]
pub async fn create_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create_pending(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/transactions/{id}/complete",
    tag = "Transaction",
    params(("id" = i64, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction completed", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 422, description = "Transaction is not pending", body = ErrorResponse)
    )
)]
pub async fn complete_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.complete(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/transactions/{id}/cancel",
    tag = "Transaction",
    params(("id" = i64, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction canceled", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 422, description = "Transaction already completed", body = ErrorResponse)
    )
)]
pub async fn cancel_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.cancel(id).await?;
    Ok(Json(response))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route("/api/transactions/{id}", get(get_transaction))
        .route(
            "/api/transactions/{id}/complete",
            post(complete_transaction),
        )
        .route("/api/transactions/{id}/cancel", post(cancel_transaction))
        .layer(Extension(app_state.di_container.transaction_query.clone()))
        .layer(Extension(app_state.di_container.transaction_command.clone()))
}
