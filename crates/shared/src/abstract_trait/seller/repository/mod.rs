pub mod command;
pub mod query;

pub use self::command::{DynSellerCommandRepository, SellerCommandRepositoryTrait};
pub use self::query::{DynSellerQueryRepository, SellerQueryRepositoryTrait};
