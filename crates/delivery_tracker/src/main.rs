use std::process;

use anyhow::{Context, Result};
use chrono::Local;
use log::{error, info};

use base::entities::time::{format_delivery_time, minutes_since_midnight};
use base::entities::ORDERS_CSV_ENV;
use base::stores::partner_store::DeliveryPartnerStore;
use dispatch::intake::load_orders_from_csv;
use dispatch::reports::build_workload_report;
use dispatch::stores::in_memory_delivery_store::InMemoryDeliveryStore;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenv::dotenv().ok();

    let orders_csv_path = dotenv::var(ORDERS_CSV_ENV)
        .context(format!("the {} env variable is not set", ORDERS_CSV_ENV))?;

    let mut store = InMemoryDeliveryStore::new();

    let summary = load_orders_from_csv(&orders_csv_path, &mut store)?;
    info!(
        "loaded orders from {}: {} orders saved, {} partners registered, {} orders assigned",
        orders_csv_path, summary.orders_saved, summary.partners_registered, summary.orders_assigned
    );

    let now_literal = format_delivery_time(minutes_since_midnight(Local::now().time()));
    for partner_id in store.get_all_partner_ids()? {
        let orders_left = store.count_orders_after_time(&partner_id, &now_literal)?;
        info!(
            "a partner with an id {} has {} orders left after {}",
            partner_id, orders_left, now_literal
        );
    }

    let report = build_workload_report(&store)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
