use anyhow::Result;
use serde::Serialize;

use base::entities::order::OrderCount;
use base::entities::partner::PartnerId;
use base::entities::time::TimeLiteral;
use base::stores::order_store::BasicOrderStore;
use base::stores::partner_store::DeliveryPartnerStore;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PartnerWorkload {
    pub partner_id: PartnerId,
    pub order_count: OrderCount,
    pub last_delivery_time: Option<TimeLiteral>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WorkloadReport {
    pub total_orders: OrderCount,
    pub unassigned_orders: OrderCount,
    pub partners: Vec<PartnerWorkload>,
}

/// Snapshot of the current workload with one row per registered partner,
/// sorted by partner id.
pub fn build_workload_report<S>(store: &S) -> Result<WorkloadReport>
where
    S: BasicOrderStore + DeliveryPartnerStore,
{
    let mut partner_ids = store.get_all_partner_ids()?;
    partner_ids.sort_unstable();

    let mut partners = Vec::with_capacity(partner_ids.len());
    for partner_id in partner_ids {
        let order_count = store.get_partner_order_count(&partner_id)?;
        let last_delivery_time = store.last_delivery_time(&partner_id)?;

        partners.push(PartnerWorkload {
            partner_id,
            order_count,
            last_delivery_time,
        });
    }

    Ok(WorkloadReport {
        total_orders: store.get_all_order_ids()?.len(),
        unassigned_orders: store.count_unassigned_orders()?,
        partners,
    })
}
