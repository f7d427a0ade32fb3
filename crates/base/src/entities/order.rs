use crate::entities::time::{parse_time_literal, DeliveryTime, TimeLiteralError};

pub type OrderId = String;

pub type OrderCount = usize;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct BasicOrderProperties {
    pub delivery_time: DeliveryTime,
}

impl BasicOrderProperties {
    pub fn from_time_literal(delivery_time: &str) -> Result<Self, TimeLiteralError> {
        Ok(Self {
            delivery_time: parse_time_literal(delivery_time)?,
        })
    }
}
