use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl AppErrorHttp {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidSeller(_) | ServiceError::InvalidTransaction(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::ForeignKey(_) => StatusCode::UNPROCESSABLE_ENTITY,
                RepositoryError::Sqlx(_) | RepositoryError::Custom(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ServiceError::InternalServerError(_) | ServiceError::Custom(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let msg = match self.0 {
            ServiceError::Validation(errors) => format!("Validation failed: {}", errors.join("; ")),
            ServiceError::NotFound(msg) => msg,
            ServiceError::InvalidSeller(msg) => msg,
            ServiceError::InvalidTransaction(msg) => msg,
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => "Not found".to_string(),
                RepositoryError::Conflict(msg) => msg,
                RepositoryError::ForeignKey(msg) => format!("Foreign key violation: {msg}"),
                RepositoryError::Sqlx(e) => {
                    error!("💥 Database error reached the HTTP layer: {e:?}");
                    "Database error".to_string()
                }
                RepositoryError::Custom(msg) => msg,
            },
            ServiceError::InternalServerError(msg) => msg,
            ServiceError::Custom(msg) => msg,
        };

        if status.is_server_error() {
            error!("💥 {} {}", status.as_u16(), msg);
        } else {
            warn!("⚠️ {} {}", status.as_u16(), msg);
        }

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        AppErrorHttp(err)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(err: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(err))
    }
}
