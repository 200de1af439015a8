mod account_page;
mod core;
mod overview_page;

pub(crate) use account_page::category_totals_table;
pub use account_page::get_account_page;
pub use core::{
    Account, AccountId, UNKNOWN_ACCOUNT_NAME, create_account_table, get_account_name,
    get_all_accounts,
};
pub use overview_page::get_overview_page;
