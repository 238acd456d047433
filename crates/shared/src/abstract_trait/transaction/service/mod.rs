pub mod command;
pub mod query;

pub use self::command::{DynTransactionCommandService, TransactionCommandServiceTrait};
pub use self::query::{DynTransactionQueryService, TransactionQueryServiceTrait};
