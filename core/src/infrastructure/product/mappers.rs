use sea_orm::ActiveValue::Set;
use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::label_analysis::entities::HealthScore;
use crate::domain::product::entities::Product;
use crate::entity::products;

impl TryFrom<products::Model> for Product {
    type Error = CoreError;

    fn try_from(model: products::Model) -> Result<Self, Self::Error> {
        let id = model.id;
        let corrupt =
            |field: &str| CoreError::Internal(format!("stored product {id} has a corrupt {field}"));

        Ok(Product {
            id: model.id,
            weight_unit: model.weight_unit.parse()?,
            product_name: model.product_name,
            product_qty: model.product_qty,
            brand_name: model.brand_name,
            weightage: model.weightage,
            product_category: model.product_category,
            ingredients: serde_json::from_value(model.ingredients)
                .map_err(|_| corrupt("ingredients"))?,
            nutritional_info: model.nutritional_info,
            proprietary_claims: serde_json::from_value(model.proprietary_claims)
                .map_err(|_| corrupt("proprietary_claims"))?,
            analysis: model.analysis,
            health_score: HealthScore {
                score: u8::try_from(model.health_score).map_err(|_| corrupt("health_score"))?,
                review: model.health_review,
            },
            image_url: model.image_url,
            purpose: model.purpose,
            frequency: model.frequency,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

pub fn to_active_model(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(product.id),
        product_name: Set(product.product_name.clone()),
        product_qty: Set(product.product_qty.clone()),
        brand_name: Set(product.brand_name.clone()),
        weightage: Set(product.weightage),
        weight_unit: Set(product.weight_unit.as_str().to_string()),
        product_category: Set(product.product_category.clone()),
        ingredients: Set(Value::from(product.ingredients.clone())),
        nutritional_info: Set(product.nutritional_info.clone()),
        proprietary_claims: Set(Value::from(product.proprietary_claims.clone())),
        analysis: Set(product.analysis.clone()),
        health_score: Set(i32::from(product.health_score.score)),
        health_review: Set(product.health_score.review.clone()),
        image_url: Set(product.image_url.clone()),
        purpose: Set(product.purpose.clone()),
        frequency: Set(product.frequency.clone()),
        created_at: Set(product.created_at.fixed_offset()),
        updated_at: Set(product.updated_at.fixed_offset()),
    }
}
