pub mod health;
pub mod label_analysis;
pub mod product;
pub mod server;
