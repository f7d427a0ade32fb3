use std::collections::HashMap;

use anyhow::{Context, Result};

use base::entities::order::{OrderCount, OrderId};
use base::entities::partner::PartnerId;
use base::entities::time::{format_delivery_time, parse_time_literal, TimeLiteral};
use base::entities::{BasicOrderProperties, Item};
use base::stores::order_store::BasicOrderStore;
use base::stores::partner_store::DeliveryPartnerStore;

use super::assignments::Assignments;

#[derive(Debug, Default)]
pub struct InMemoryDeliveryStore {
    orders: HashMap<OrderId, Item<OrderId, BasicOrderProperties>>,
    assignments: Assignments,
}

impl InMemoryDeliveryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl BasicOrderStore for InMemoryDeliveryStore {
    type OrderProperties = BasicOrderProperties;

    fn save_order(&mut self, order: Item<OrderId, Self::OrderProperties>) -> Result<()> {
        self.orders.insert(order.id.clone(), order);
        Ok(())
    }

    fn get_order_by_id(&self, id: &str) -> Result<Option<Item<OrderId, Self::OrderProperties>>> {
        Ok(self.orders.get(id).cloned())
    }

    fn get_all_order_ids(&self) -> Result<Vec<OrderId>> {
        Ok(self.orders.keys().cloned().collect())
    }

    fn remove_order(&mut self, id: &str) -> Result<()> {
        if self.orders.remove(id).is_none() {
            log::debug!("skipped removing a nonexistent order with an id {}", id);
            return Ok(());
        }

        self.assignments.unlink_order(id);
        Ok(())
    }
}

impl DeliveryPartnerStore for InMemoryDeliveryStore {
    fn save_partner(&mut self, id: PartnerId) -> Result<()> {
        self.assignments.register_partner(id);
        Ok(())
    }

    fn get_partner_by_id(&self, id: &str) -> Result<Option<PartnerId>> {
        if self.assignments.contains_partner(id) {
            Ok(Some(id.to_string()))
        } else {
            Ok(None)
        }
    }

    fn get_all_partner_ids(&self) -> Result<Vec<PartnerId>> {
        Ok(self.assignments.partner_ids())
    }

    fn remove_partner(&mut self, id: &str) -> Result<()> {
        if !self.assignments.remove_partner(id) {
            log::debug!("skipped removing a nonexistent partner with an id {}", id);
        }

        Ok(())
    }

    fn assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> Result<()> {
        if !self.orders.contains_key(order_id) {
            log::debug!(
                "skipped assigning a nonexistent order with an id {} to a partner with an id {}",
                order_id,
                partner_id
            );
            return Ok(());
        }

        if !self.assignments.link(order_id.to_string(), partner_id) {
            log::debug!(
                "skipped assigning an order with an id {} to a nonexistent partner with an id {}",
                order_id,
                partner_id
            );
        }

        Ok(())
    }

    fn get_assigned_partner(&self, order_id: &str) -> Result<Option<PartnerId>> {
        Ok(self.assignments.partner_of(order_id).cloned())
    }

    fn get_partner_order_ids(&self, partner_id: &str) -> Result<Vec<OrderId>> {
        let order_ids = match self.assignments.order_ids_of(partner_id) {
            None => Vec::new(),
            Some(order_ids) => order_ids.iter().cloned().collect(),
        };

        Ok(order_ids)
    }

    fn get_partner_order_count(&self, partner_id: &str) -> Result<OrderCount> {
        Ok(self.assignments.partner_order_count(partner_id))
    }

    fn count_unassigned_orders(&self) -> Result<OrderCount> {
        Ok(self.orders.len() - self.assignments.linked_order_count())
    }

    fn count_orders_after_time(
        &self,
        partner_id: &str,
        time_literal: &str,
    ) -> Result<OrderCount> {
        let given_time = parse_time_literal(time_literal)?;

        let order_ids = match self.assignments.order_ids_of(partner_id) {
            None => return Ok(0),
            Some(order_ids) => order_ids,
        };

        let mut count = 0;
        for order_id in order_ids.iter() {
            let order = self
                .orders
                .get(order_id)
                .context(format!("no order with an id {}", order_id))?;

            if order.props.delivery_time > given_time {
                count += 1;
            }
        }

        Ok(count)
    }

    fn last_delivery_time(&self, partner_id: &str) -> Result<Option<TimeLiteral>> {
        let order_ids = match self.assignments.order_ids_of(partner_id) {
            None => return Ok(None),
            Some(order_ids) => order_ids,
        };

        let mut latest_time = 0;
        for order_id in order_ids.iter() {
            let order = self
                .orders
                .get(order_id)
                .context(format!("no order with an id {}", order_id))?;

            if order.props.delivery_time > latest_time {
                latest_time = order.props.delivery_time;
            }
        }

        Ok(Some(format_delivery_time(latest_time)))
    }
}
