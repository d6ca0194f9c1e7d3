pub mod feature_flags;
pub mod orders;
pub mod products;
pub mod promotions;
pub mod transaction_log;
pub mod users;
