use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_name: String,
    pub product_qty: String,
    pub brand_name: String,
    pub weightage: f64,
    pub weight_unit: String,
    pub product_category: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub nutritional_info: Option<Json>,
    #[sea_orm(column_type = "JsonBinary")]
    pub proprietary_claims: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub analysis: Option<Json>,
    pub health_score: i32,
    pub health_review: String,
    pub image_url: Option<String>,
    pub purpose: Option<String>,
    pub frequency: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
