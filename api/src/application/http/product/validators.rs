use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Form fields of a product submission, minus the ingredient source which is
/// checked separately (exactly one of `ingredients` text or an
/// `ingredients_image` upload must be present).
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddProductValidator {
    #[validate(length(min = 1, message = "product_name is required"))]
    pub product_name: String,

    #[validate(length(min = 1, message = "product_qty is required"))]
    pub product_qty: String,

    #[validate(length(min = 1, message = "brand_name is required"))]
    pub brand_name: String,

    #[validate(range(exclusive_min = 0.0, message = "weightage must be positive"))]
    pub weightage: f64,

    pub weight_unit: String,

    #[validate(length(min = 1, message = "product_category is required"))]
    pub product_category: String,

    pub image_url: Option<String>,

    pub purpose: Option<String>,

    pub frequency: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
pub struct GetProductsParams {
    /// Case-insensitive substring match on the product name.
    pub product_name: Option<String>,
    /// Case-insensitive substring match on the brand name.
    pub brand_name: Option<String>,
    /// Exact match.
    pub product_category: Option<String>,
    /// Exact match.
    pub purpose: Option<String>,
    /// Exact match.
    pub frequency: Option<String>,
    /// 1-based page number, defaults to 1.
    pub page: Option<u64>,
    /// Page size, defaults to 10, capped at 100.
    pub limit: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddProductValidator {
        AddProductValidator {
            product_name: "Granola".to_string(),
            product_qty: "1 box".to_string(),
            brand_name: "Acme".to_string(),
            weightage: 500.0,
            weight_unit: "g".to_string(),
            product_category: "Cereal".to_string(),
            image_url: None,
            purpose: None,
            frequency: None,
        }
    }

    #[test]
    fn complete_form_passes_validation() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn blank_required_fields_fail_validation() {
        let mut form = form();
        form.product_name = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn zero_weightage_fails_validation() {
        let mut form = form();
        form.weightage = 0.0;
        assert!(form.validate().is_err());
    }
}
