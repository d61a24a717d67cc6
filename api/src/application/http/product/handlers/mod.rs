pub mod add_product;
pub mod get_products;
