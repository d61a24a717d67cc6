use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::common::generate_uuid_v7;
use crate::domain::label_analysis::entities::HealthScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    G,
    Ml,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::G => "g",
            WeightUnit::Ml => "ml",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(WeightUnit::G),
            "ml" => Ok(WeightUnit::Ml),
            other => Err(CoreError::Validation(format!(
                "weight_unit must be 'g' or 'ml', got '{other}'"
            ))),
        }
    }
}

/// A catalogued product together with the analysis derived at submission
/// time. Analysis payloads are stored exactly as the model produced them.
/// Records are insert-only; there is no update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub product_name: String,
    pub product_qty: String,
    pub brand_name: String,
    pub weightage: f64,
    pub weight_unit: WeightUnit,
    pub product_category: String,
    pub ingredients: Vec<String>,
    #[schema(value_type = Object, nullable)]
    pub nutritional_info: Option<Value>,
    /// Misleading claims lifted out of the analysis, claim text only.
    pub proprietary_claims: Vec<String>,
    /// Full analysis object as returned by the model.
    #[schema(value_type = Object, nullable)]
    pub analysis: Option<Value>,
    pub health_score: HealthScore,
    pub image_url: Option<String>,
    pub purpose: Option<String>,
    pub frequency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields of a product submission.
pub struct ProductFields {
    pub product_name: String,
    pub product_qty: String,
    pub brand_name: String,
    pub weightage: f64,
    pub weight_unit: WeightUnit,
    pub product_category: String,
    pub image_url: Option<String>,
    pub purpose: Option<String>,
    pub frequency: Option<String>,
}

impl Product {
    pub fn new(
        fields: ProductFields,
        ingredients: Vec<String>,
        analysis: Option<Value>,
        nutritional_info: Option<Value>,
        health_score: HealthScore,
        proprietary_claims: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: generate_uuid_v7(),
            product_name: fields.product_name,
            product_qty: fields.product_qty,
            brand_name: fields.brand_name,
            weightage: fields.weightage,
            weight_unit: fields.weight_unit,
            product_category: fields.product_category,
            ingredients,
            nutritional_info,
            proprietary_claims,
            analysis,
            health_score,
            image_url: fields.image_url,
            purpose: fields.purpose,
            frequency: fields.frequency,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_unit_parses_only_g_and_ml() {
        assert_eq!("g".parse::<WeightUnit>().unwrap(), WeightUnit::G);
        assert_eq!("ml".parse::<WeightUnit>().unwrap(), WeightUnit::Ml);
        assert!(matches!(
            "oz".parse::<WeightUnit>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn weight_unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WeightUnit::Ml).unwrap(), "\"ml\"");
    }
}
