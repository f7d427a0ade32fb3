use crate::entities::order::{OrderCount, OrderId};
use crate::entities::partner::PartnerId;
use crate::entities::time::TimeLiteral;
use anyhow::Result;

pub trait DeliveryPartnerStore {
    /// Registers the partner with an empty order set. Saving an already
    /// registered partner resets its set and unassigns the orders in it.
    fn save_partner(&mut self, id: PartnerId) -> Result<()>;
    fn get_partner_by_id(&self, id: &str) -> Result<Option<PartnerId>>;
    fn get_all_partner_ids(&self) -> Result<Vec<PartnerId>>;
    /// Unassigns all orders of the partner and unregisters it. The order
    /// records themselves are kept. Does nothing for an unknown id.
    fn remove_partner(&mut self, id: &str) -> Result<()>;

    /// Assigns the order to the partner. Does nothing unless both exist.
    /// An order assigned to another partner is moved, never double-counted.
    fn assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> Result<()>;
    fn get_assigned_partner(&self, order_id: &str) -> Result<Option<PartnerId>>;

    fn get_partner_order_ids(&self, partner_id: &str) -> Result<Vec<OrderId>>;
    fn get_partner_order_count(&self, partner_id: &str) -> Result<OrderCount>;
    fn count_unassigned_orders(&self) -> Result<OrderCount>;

    /// Counts the partner's orders with a delivery time strictly after the
    /// given "HH:MM" literal. Zero for an unknown partner.
    fn count_orders_after_time(
        &self,
        partner_id: &str,
        time_literal: &str,
    ) -> Result<OrderCount>;
    /// The latest delivery time among the partner's orders as an "HH:MM"
    /// literal, "00:00" for a partner without orders, None for an unknown
    /// partner.
    fn last_delivery_time(&self, partner_id: &str) -> Result<Option<TimeLiteral>>;
}
