use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::seller::service::{DynSellerCommandService, DynSellerQueryService},
    domain::{
        requests::{CreateSellerRequest, FindAllSellers, UpdateSellerRequest},
        responses::{ApiResponse, ApiResponsePagination, SellerResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/sellers",
    tag = "Seller",
    params(FindAllSellers),
    responses(
        (status = 200, description = "Page of live sellers", body = ApiResponsePagination<Vec<SellerResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_sellers(
    Extension(service): Extension<DynSellerQueryService>,
    Query(params): Query<FindAllSellers>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/sellers/{id}",
    tag = "Seller",
    params(("id" = i64, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller details", body = ApiResponse<SellerResponse>),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn get_seller(
    Extension(service): Extension<DynSellerQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/sellers",
    tag = "Seller",
    request_body = CreateSellerRequest,
    responses(
        (status = 201, description = "Seller created", body = ApiResponse<SellerResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = ErrorResponse)
    )
)]
pub async fn create_seller(
    Extension(service): Extension<DynSellerCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSellerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/sellers/{id}",
    tag = "Seller",
    params(("id" = i64, Path, description = "Seller ID")),
    request_body = UpdateSellerRequest,
    responses(
        (status = 200, description = "Seller updated", body = ApiResponse<SellerResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn update_seller(
    Extension(service): Extension<DynSellerCommandService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateSellerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/sellers/{id}",
    tag = "Seller",
    params(("id" = i64, Path, description = "Seller ID")),
    responses(
        (status = 204, description = "Seller soft-deleted"),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn delete_seller(
    Extension(service): Extension<DynSellerCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn seller_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/sellers", get(get_sellers).post(create_seller))
        .route(
            "/api/sellers/{id}",
            get(get_seller).patch(update_seller).delete(delete_seller),
        )
        .layer(Extension(app_state.di_container.seller_query.clone()))
        .layer(Extension(app_state.di_container.seller_command.clone()))
}
