pub mod command;
pub mod query;

pub use self::command::{DynSellerCommandService, SellerCommandServiceTrait};
pub use self::query::{DynSellerQueryService, SellerQueryServiceTrait};
