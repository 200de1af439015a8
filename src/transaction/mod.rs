mod core;
mod transactions_page;

pub use core::{Transaction, create_transaction_table, get_transactions_for_account};
pub use transactions_page::get_transactions_page;
