use crate::domain::product::entities::{Product, ProductFields};

/// Where the ingredient list comes from: typed in by hand, or read off a
/// label photo via OCR. Exactly one source per submission.
#[derive(Debug)]
pub enum IngredientSource {
    Manual(String),
    LabelImage(Vec<u8>),
}

pub struct CreateProductInput {
    pub fields: ProductFields,
    pub ingredients: IngredientSource,
}

#[derive(Debug, Clone, Default)]
pub struct GetProductsFilter {
    pub product_name: Option<String>,
    pub brand_name: Option<String>,
    pub product_category: Option<String>,
    pub purpose: Option<String>,
    pub frequency: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_products: u64,
}
