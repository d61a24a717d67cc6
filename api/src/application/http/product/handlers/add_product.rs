use std::collections::HashMap;

use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use labelwise_core::domain::common::entities::app_errors::CoreError;
use labelwise_core::domain::product::entities::ProductFields;
use labelwise_core::domain::product::ports::ProductService;
use labelwise_core::domain::product::value_objects::{CreateProductInput, IngredientSource};

use crate::application::http::product::validators::AddProductValidator;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddProductResponse {
    pub message: String,
    pub product_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/add_product",
    tag = "product",
    summary = "Add a product",
    description = "Analyzes the product's ingredients (given as text or read from a label image) \
                   and stores the product with its derived health score",
    responses(
        (status = 201, body = AddProductResponse),
        (status = 400, body = crate::application::http::server::api_entities::api_error::ErrorResponse)
    )
)]
pub async fn add_product(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AddProductResponse>, ApiError> {
    let mut text_fields: HashMap<String, String> = HashMap::new();
    let mut ingredients_text: Option<String> = None;
    let mut ingredients_image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "ingredients" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read ingredients: {}", e))
                })?;
                if !value.trim().is_empty() {
                    ingredients_text = Some(value);
                }
            }
            "ingredients_image" => {
                let content_type = field.content_type().unwrap_or("").to_string();
                if !content_type.starts_with("image/") {
                    return Err(ApiError::BadRequest(
                        "ingredients_image must be an image".to_string(),
                    ));
                }

                let data = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read ingredients_image: {}", e))
                })?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                if !data.is_empty() {
                    ingredients_image = Some(data.to_vec());
                }
            }
            "" => {}
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read {name}: {}", e)))?;
                text_fields.insert(name, value);
            }
        }
    }

    let form = build_form(&text_fields)?;
    form.validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let weight_unit = form
        .weight_unit
        .parse()
        .map_err(|e: CoreError| ApiError::BadRequest(e.to_string()))?;

    let ingredients = resolve_ingredient_source(ingredients_text, ingredients_image)?;

    let product = state
        .service
        .add_product(CreateProductInput {
            fields: ProductFields {
                product_name: form.product_name,
                product_qty: form.product_qty,
                brand_name: form.brand_name,
                weightage: form.weightage,
                weight_unit,
                product_category: form.product_category,
                image_url: form.image_url,
                purpose: form.purpose,
                frequency: form.frequency,
            },
            ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddProductResponse {
        message: "Product added successfully".to_string(),
        product_id: product.id,
    }))
}

/// Exactly one ingredient source must be supplied.
fn resolve_ingredient_source(
    text: Option<String>,
    image: Option<Vec<u8>>,
) -> Result<IngredientSource, ApiError> {
    match (text, image) {
        (Some(_), Some(_)) => Err(ApiError::BadRequest(
            "Provide ingredients either as text or as a label image, not both".to_string(),
        )),
        (Some(text), None) => Ok(IngredientSource::Manual(text)),
        (None, Some(image)) => Ok(IngredientSource::LabelImage(image)),
        (None, None) => Err(ApiError::BadRequest(
            "Either ingredients text or a label image is required".to_string(),
        )),
    }
}

fn build_form(fields: &HashMap<String, String>) -> Result<AddProductValidator, ApiError> {
    let take = |name: &str| {
        fields
            .get(name)
            .cloned()
            .ok_or_else(|| ApiError::BadRequest(format!("Missing {name} field")))
    };
    let optional = |name: &str| fields.get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let weightage_raw = take("weightage")?;
    let weightage = weightage_raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest("weightage must be a number".to_string()))?;

    Ok(AddProductValidator {
        product_name: take("product_name")?,
        product_qty: take("product_qty")?,
        brand_name: take("brand_name")?,
        weightage,
        weight_unit: take("weight_unit")?,
        product_category: take("product_category")?,
        image_url: optional("image_url"),
        purpose: optional("purpose"),
        frequency: optional("frequency"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> HashMap<String, String> {
        HashMap::from([
            ("product_name".to_string(), "Granola".to_string()),
            ("product_qty".to_string(), "1 box".to_string()),
            ("brand_name".to_string(), "Acme".to_string()),
            ("weightage".to_string(), "500".to_string()),
            ("weight_unit".to_string(), "g".to_string()),
            ("product_category".to_string(), "Cereal".to_string()),
        ])
    }

    #[test]
    fn form_builds_from_complete_fields() {
        let form = build_form(&fields()).unwrap();
        assert_eq!(form.product_name, "Granola");
        assert_eq!(form.weightage, 500.0);
        assert!(form.purpose.is_none());
    }

    #[test]
    fn optional_fields_are_picked_up() {
        let mut complete = fields();
        complete.insert("purpose".to_string(), " breakfast ".to_string());
        let form = build_form(&complete).unwrap();
        assert_eq!(form.purpose.as_deref(), Some("breakfast"));
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut incomplete = fields();
        incomplete.remove("brand_name");
        let error = build_form(&incomplete).unwrap_err();
        assert!(error.to_string().contains("brand_name"));
    }

    #[test]
    fn non_numeric_weightage_is_rejected() {
        let mut bad = fields();
        bad.insert("weightage".to_string(), "heavy".to_string());
        assert!(build_form(&bad).is_err());
    }

    #[test]
    fn missing_both_ingredient_sources_is_rejected() {
        let error = resolve_ingredient_source(None, None).unwrap_err();
        assert!(matches!(error, ApiError::BadRequest(_)));
        assert!(error.to_string().contains("required"));
    }

    #[test]
    fn supplying_both_ingredient_sources_is_rejected() {
        let error =
            resolve_ingredient_source(Some("water".to_string()), Some(vec![1, 2, 3])).unwrap_err();
        assert!(matches!(error, ApiError::BadRequest(_)));
    }

    #[test]
    fn single_ingredient_source_is_accepted() {
        assert!(matches!(
            resolve_ingredient_source(Some("water".to_string()), None),
            Ok(IngredientSource::Manual(_))
        ));
        assert!(matches!(
            resolve_ingredient_source(None, Some(vec![1])),
            Ok(IngredientSource::LabelImage(_))
        ));
    }
}
