use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use base::entities::order::OrderId;
use base::entities::partner::PartnerId;
use base::entities::time::TimeLiteral;
use base::entities::{BasicOrderProperties, Item};
use base::stores::order_store::BasicOrderStore;
use base::stores::partner_store::DeliveryPartnerStore;

pub type IntakeNumber = u32;

/// One row of an intake file. An empty partner id leaves the order
/// unassigned.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub delivery_time: TimeLiteral,
    pub partner_id: Option<PartnerId>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntakeSummary {
    pub orders_saved: IntakeNumber,
    pub partners_registered: IntakeNumber,
    pub orders_assigned: IntakeNumber,
}

pub fn load_orders_from_csv<P, S>(path: P, store: &mut S) -> Result<IntakeSummary>
where
    P: AsRef<Path>,
    S: BasicOrderStore<OrderProperties = BasicOrderProperties> + DeliveryPartnerStore,
{
    let mut reader = csv::Reader::from_path(path)
        .context("an error occurred on opening an intake file")?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        let record: OrderRecord =
            record.context("an error occurred on deserializing an order record")?;
        records.push(record);
    }

    apply_order_records(records, store)
}

/// Replays the records in order: saves each order, registers a partner on
/// its first appearance and assigns the order to it. A partner seen earlier
/// in the batch is never re-registered, so its previous assignments survive.
pub fn apply_order_records<S>(records: Vec<OrderRecord>, store: &mut S) -> Result<IntakeSummary>
where
    S: BasicOrderStore<OrderProperties = BasicOrderProperties> + DeliveryPartnerStore,
{
    let mut summary = IntakeSummary::default();

    for record in records {
        let props = BasicOrderProperties::from_time_literal(&record.delivery_time).context(
            format!(
                "an invalid delivery time of an order with an id {}",
                record.order_id
            ),
        )?;

        store.save_order(Item {
            id: record.order_id.clone(),
            props,
        })?;
        summary.orders_saved += 1;

        if let Some(partner_id) = record.partner_id {
            if store.get_partner_by_id(&partner_id)?.is_none() {
                store.save_partner(partner_id.clone())?;
                summary.partners_registered += 1;
            }

            store.assign_order_to_partner(&record.order_id, &partner_id)?;
            summary.orders_assigned += 1;
        }
    }

    log::debug!(
        "applied the intake records: {} orders saved, {} partners registered, {} orders assigned",
        summary.orders_saved,
        summary.partners_registered,
        summary.orders_assigned
    );

    Ok(summary)
}
