use crate::entities::order::OrderId;
use crate::entities::Item;
use anyhow::Result;

pub trait BasicOrderStore {
    type OrderProperties;

    /// Saves the order, overwriting an existing record with the same id.
    /// An assignment of the overwritten order is kept.
    fn save_order(&mut self, order: Item<OrderId, Self::OrderProperties>) -> Result<()>;
    fn get_order_by_id(&self, id: &str) -> Result<Option<Item<OrderId, Self::OrderProperties>>>;
    fn get_all_order_ids(&self) -> Result<Vec<OrderId>>;
    /// Removes the order record together with its assignment, if any.
    /// Does nothing for an unknown id.
    fn remove_order(&mut self, id: &str) -> Result<()>;
}
