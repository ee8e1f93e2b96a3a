pub mod appointment;
pub mod cart;
pub mod catalog_item;
pub mod membership;
pub mod professional;
pub mod review;
pub mod user;
