pub mod order_store;
pub mod partner_store;
