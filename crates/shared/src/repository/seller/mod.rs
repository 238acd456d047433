mod command;
mod query;

pub use self::command::SellerCommandRepository;
pub use self::query::SellerQueryRepository;
