use std::collections::{HashMap, HashSet};

use base::entities::order::{OrderCount, OrderId};
use base::entities::partner::PartnerId;

/// Both directions of the order to partner relation plus the partner
/// registry: a partner is registered iff it owns an order id set, possibly
/// empty. Every mutation goes through this struct, so the two directions
/// cannot disagree.
#[derive(Debug, Default)]
pub struct Assignments {
    orders_by_partner: HashMap<PartnerId, HashSet<OrderId>>,
    partner_by_order: HashMap<OrderId, PartnerId>,
}

impl Assignments {
    /// Registers the partner with an empty order set. Re-registering an
    /// existing partner unassigns every order of its previous set first.
    pub fn register_partner(&mut self, partner_id: PartnerId) {
        if let Some(previous_orders) = self
            .orders_by_partner
            .insert(partner_id.clone(), HashSet::new())
        {
            for order_id in previous_orders.iter() {
                self.partner_by_order.remove(order_id);
            }

            if !previous_orders.is_empty() {
                log::debug!(
                    "unassigned {} orders on re-registering a partner with an id {}",
                    previous_orders.len(),
                    partner_id
                );
            }
        }
    }

    pub fn contains_partner(&self, partner_id: &str) -> bool {
        self.orders_by_partner.contains_key(partner_id)
    }

    /// Links the order to the partner, moving it from another partner if it
    /// was linked already. Returns false when the partner is not registered.
    pub fn link(&mut self, order_id: OrderId, partner_id: &str) -> bool {
        if !self.orders_by_partner.contains_key(partner_id) {
            return false;
        }

        if let Some(previous_partner) = self
            .partner_by_order
            .insert(order_id.clone(), partner_id.to_string())
        {
            if previous_partner != partner_id {
                self.orders_by_partner
                    .get_mut(&previous_partner)
                    .unwrap()
                    .remove(&order_id);
            }
        }

        self.orders_by_partner
            .get_mut(partner_id)
            .unwrap()
            .insert(order_id);

        true
    }

    /// Removes the order's link and returns the partner it pointed to.
    pub fn unlink_order(&mut self, order_id: &str) -> Option<PartnerId> {
        match self.partner_by_order.remove(order_id) {
            None => None,
            Some(partner_id) => {
                self.orders_by_partner
                    .get_mut(&partner_id)
                    .unwrap()
                    .remove(order_id);

                Some(partner_id)
            }
        }
    }

    /// Unregisters the partner, unlinking every order of its set. Returns
    /// false when the partner is not registered.
    pub fn remove_partner(&mut self, partner_id: &str) -> bool {
        match self.orders_by_partner.remove(partner_id) {
            None => false,
            Some(orders) => {
                for order_id in orders.iter() {
                    self.partner_by_order.remove(order_id);
                }

                true
            }
        }
    }

    pub fn partner_of(&self, order_id: &str) -> Option<&PartnerId> {
        self.partner_by_order.get(order_id)
    }

    pub fn order_ids_of(&self, partner_id: &str) -> Option<&HashSet<OrderId>> {
        self.orders_by_partner.get(partner_id)
    }

    pub fn partner_order_count(&self, partner_id: &str) -> OrderCount {
        self.orders_by_partner
            .get(partner_id)
            .map_or(0, HashSet::len)
    }

    pub fn linked_order_count(&self) -> OrderCount {
        self.partner_by_order.len()
    }

    pub fn partner_ids(&self) -> Vec<PartnerId> {
        self.orders_by_partner.keys().cloned().collect()
    }
}
