use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::product::entities::Product;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::value_objects::GetProductsFilter;
use crate::entity::products;
use crate::infrastructure::product::mappers::to_active_model;

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> CoreError {
    error!("database query failed: {}", e);
    CoreError::Internal("database query failed".to_string())
}

/// Builds the WHERE clause for a product listing: case-insensitive substring
/// match on name and brand, exact match on category, purpose, and frequency.
fn filter_condition(filter: &GetProductsFilter) -> Condition {
    let substring = [
        (products::Column::ProductName, &filter.product_name),
        (products::Column::BrandName, &filter.brand_name),
    ];
    let exact = [
        (products::Column::ProductCategory, &filter.product_category),
        (products::Column::Purpose, &filter.purpose),
        (products::Column::Frequency, &filter.frequency),
    ];

    let mut condition = Condition::all();
    for (column, value) in substring {
        if let Some(value) = value
            && !value.trim().is_empty()
        {
            condition = condition.add(Expr::col(column).ilike(format!("%{}%", value.trim())));
        }
    }
    for (column, value) in exact {
        if let Some(value) = value
            && !value.trim().is_empty()
        {
            condition = condition.add(column.eq(value.trim()));
        }
    }
    condition
}

impl ProductRepository for PostgresProductRepository {
    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        let model = products::Entity::insert(to_active_model(&product))
            .exec_with_returning(&self.db)
            .await
            .map_err(db_error)?;

        Product::try_from(model)
    }

    async fn fetch_products(
        &self,
        filter: GetProductsFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Product>, u64), CoreError> {
        let condition = filter_condition(&filter);

        let total = products::Entity::find()
            .filter(condition.clone())
            .count(&self.db)
            .await
            .map_err(db_error)?;

        let models = products::Entity::find()
            .filter(condition)
            .order_by_desc(products::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        let products = models
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((products, total))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;

    fn sql(filter: &GetProductsFilter) -> String {
        products::Entity::find()
            .filter(filter_condition(filter))
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn blank_filter_fields_are_ignored() {
        let sql = sql(&GetProductsFilter {
            product_name: Some("  ".to_string()),
            ..Default::default()
        });
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn provided_fields_each_add_a_clause() {
        let sql = sql(&GetProductsFilter {
            product_name: Some("granola".to_string()),
            brand_name: Some("acme".to_string()),
            ..Default::default()
        });
        assert!(sql.contains(r#""product_name" ILIKE '%granola%'"#));
        assert!(sql.contains(r#""brand_name" ILIKE '%acme%'"#));
    }

    #[test]
    fn category_purpose_and_frequency_match_exactly() {
        let sql = sql(&GetProductsFilter {
            product_category: Some("Cereal".to_string()),
            purpose: Some("  snacking ".to_string()),
            ..Default::default()
        });
        assert!(sql.contains(r#""product_category" = 'Cereal'"#));
        assert!(sql.contains(r#""purpose" = 'snacking'"#));
        assert!(!sql.contains(r#""purpose" ILIKE"#));
    }
}
