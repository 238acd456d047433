use crate::{
    abstract_trait::seller::{
        repository::DynSellerCommandRepository, service::SellerCommandServiceTrait,
    },
    domain::{
        requests::{CreateSellerRequest, UpdateSellerRequest},
        responses::{ApiResponse, SellerResponse},
    },
    errors::{ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct SellerCommandService {
    command: DynSellerCommandRepository,
}

impl SellerCommandService {
    pub async fn new(command: DynSellerCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl SellerCommandServiceTrait for SellerCommandService {
    async fn create(
        &self,
        req: &CreateSellerRequest,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            warn!("⚠️ Seller validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!("🆕 Creating seller name={}", req.name);

        let seller = self.command.create(req).await.map_err(|e| {
            error!("💥 Failed to create seller {}: {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        info!("✅ Seller created with id={}", seller.id);

        Ok(ApiResponse::success(
            "Seller created successfully",
            SellerResponse::from(seller),
        ))
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            warn!("⚠️ Seller update validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!("✏️ Updating seller {id}");

        let seller = self.command.update(id, req).await.map_err(|e| {
            error!("💥 Failed to update seller {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let Some(seller) = seller else {
            warn!("🔎 Seller {id} not found for update");
            return Err(ServiceError::NotFound(format!("Seller with id {id} not found")));
        };

        Ok(ApiResponse::success(
            "Seller updated successfully",
            SellerResponse::from(seller),
        ))
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting seller {id}");

        let deleted = self.command.soft_delete(id).await.map_err(|e| {
            error!("💥 Failed to delete seller {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if !deleted {
            warn!("🔎 Seller {id} not found for deletion");
            return Err(ServiceError::NotFound(format!("Seller with id {id} not found")));
        }

        info!("✅ Seller {id} deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::seller::repository::SellerQueryRepositoryTrait,
        repository::memory::InMemoryStore,
    };
    use std::sync::Arc;

    fn create_request(name: &str, contact_info: &str) -> CreateSellerRequest {
        CreateSellerRequest {
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }

    #[tokio::test]
    async fn creates_valid_seller() {
        let store = InMemoryStore::new();
        let svc = SellerCommandService::new(Arc::new(store.clone())).await;

        let created = svc
            .create(&create_request("Alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(created.status, "success");
        assert_eq!(created.data.name, "Alice");
        assert!(store.find_by_id(created.data.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_out_of_bounds_fields() {
        let svc = SellerCommandService::new(Arc::new(InMemoryStore::new())).await;

        let result = svc.create(&create_request("Al", "alice@example.com")).await;
        match result {
            Err(ServiceError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.starts_with("name")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let result = svc.create(&create_request("Alice", "a@b")).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn update_keeps_absent_fields() {
        let store = InMemoryStore::new();
        let svc = SellerCommandService::new(Arc::new(store.clone())).await;
        let created = svc
            .create(&create_request("Alice", "alice@example.com"))
            .await
            .unwrap()
            .data;

        let updated = svc
            .update(
                created.id,
                &UpdateSellerRequest {
                    name: Some("Alicia".into()),
                    contact_info: None,
                },
            )
            .await
            .unwrap()
            .data;

        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.contact_info, "alice@example.com");
        assert_eq!(updated.registration_date, created.registration_date);

        let missing = svc.update(42, &UpdateSellerRequest::default()).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_soft_and_not_repeatable() {
        let store = InMemoryStore::new();
        let svc = SellerCommandService::new(Arc::new(store.clone())).await;
        let id = svc
            .create(&create_request("Alice", "alice@example.com"))
            .await
            .unwrap()
            .data
            .id;

        svc.delete(id).await.unwrap();
        assert!(store.find_by_id(id).await.unwrap().is_none());

        assert!(matches!(svc.delete(id).await, Err(ServiceError::NotFound(_))));

        let after = svc
            .update(
                id,
                &UpdateSellerRequest {
                    name: Some("Ghost".into()),
                    contact_info: None,
                },
            )
            .await;
        assert!(matches!(after, Err(ServiceError::NotFound(_))));
    }
}
