pub mod command;
pub mod query;

pub use self::command::{DynTransactionCommandRepository, TransactionCommandRepositoryTrait};
pub use self::query::{DynTransactionQueryRepository, TransactionQueryRepositoryTrait};
