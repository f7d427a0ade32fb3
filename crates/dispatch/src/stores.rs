pub mod assignments;
pub mod in_memory_delivery_store;
