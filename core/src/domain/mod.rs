pub mod common;
pub mod label_analysis;
pub mod product;
