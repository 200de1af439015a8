mod category;
mod data_page;
mod merchant;

pub use category::{
    CategoryTotal, UNCATEGORIZED_LABEL, get_category_totals_for_account,
    get_highest_spending_categories, get_lowest_spending_categories,
};
pub use data_page::get_data_page;
pub use merchant::{TopMerchant, create_top_merchant_table, get_top_merchants};
