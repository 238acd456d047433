mod command;
mod query;

pub use self::command::SellerCommandService;
pub use self::query::SellerQueryService;
