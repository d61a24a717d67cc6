use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::product::entities::Product;
use crate::domain::product::value_objects::{CreateProductInput, GetProductsFilter, ProductPage};

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    /// Returns the filtered page of products plus the total count matching
    /// the filter (ignoring pagination).
    fn fetch_products(
        &self,
        filter: GetProductsFilter,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<(Vec<Product>, u64), CoreError>> + Send;
}

pub trait ProductService: Send + Sync {
    fn add_product(
        &self,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_products(
        &self,
        filter: GetProductsFilter,
    ) -> impl Future<Output = Result<ProductPage, CoreError>> + Send;
}
