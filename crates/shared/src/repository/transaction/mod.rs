mod command;
mod query;

pub use self::command::TransactionCommandRepository;
pub use self::query::TransactionQueryRepository;
