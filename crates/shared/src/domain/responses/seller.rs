use crate::model::seller::SellerModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerResponse {
    pub id: i64,
    pub name: String,
    pub contact_info: String,
    #[schema(value_type = String, format = DateTime)]
    pub registration_date: NaiveDateTime,
}

impl From<SellerModel> for SellerResponse {
    fn from(value: SellerModel) -> Self {
        SellerResponse {
            id: value.id,
            name: value.name,
            contact_info: value.contact_info,
            registration_date: value.registration_date,
        }
    }
}
