pub mod entities;
pub mod stores;
