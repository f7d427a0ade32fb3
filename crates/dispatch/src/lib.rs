pub mod intake;
pub mod reports;
pub mod stores;
