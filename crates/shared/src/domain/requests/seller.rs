use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, IntoParams)]
pub struct FindAllSellers {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

impl Default for FindAllSellers {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: String::new(),
        }
    }
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateSellerRequest {
    #[validate(length(min = 3, max = 255, message = "must be between 3 and 255 characters"))]
    pub name: String,

    #[validate(length(min = 5, max = 500, message = "must be between 5 and 500 characters"))]
    pub contact_info: String,
}

/// Partial update; fields left out keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateSellerRequest {
    #[validate(length(min = 3, max = 255, message = "must be between 3 and 255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 500, message = "must be between 5 and 500 characters"))]
    pub contact_info: Option<String>,
}
