pub mod order;
pub mod partner;
pub mod time;

pub use order::BasicOrderProperties;
pub use time::DeliveryTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Item<I, P> {
    pub id: I,
    pub props: P,
}

pub const ORDERS_CSV_ENV: &str = "ORDERS_CSV";
