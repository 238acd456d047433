mod command;
mod query;

pub use self::command::TransactionCommandService;
pub use self::query::TransactionQueryService;
