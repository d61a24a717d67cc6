use tracing::info;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::common::services::Service;
use crate::domain::label_analysis::entities::{AnalysisReport, HealthScore};
use crate::domain::label_analysis::parser::parse_analysis_response;
use crate::domain::label_analysis::ports::{LlmClient, OcrEngine};
use crate::domain::label_analysis::prompt::build_analysis_prompt;
use crate::domain::label_analysis::scoring::{health_score, overall_review};
use crate::domain::product::entities::Product;
use crate::domain::product::ports::{ProductRepository, ProductService};
use crate::domain::product::value_objects::{
    CreateProductInput, GetProductsFilter, IngredientSource, ProductPage,
};

const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

impl<P, L, O> ProductService for Service<P, L, O>
where
    P: ProductRepository,
    L: LlmClient,
    O: OcrEngine,
{
    async fn add_product(&self, input: CreateProductInput) -> Result<Product, CoreError> {
        let ingredients = match input.ingredients {
            IngredientSource::Manual(text) => text
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>(),
            IngredientSource::LabelImage(image) => {
                let detections = self.ocr_engine.extract_text(&image).await?;
                detections
                    .into_iter()
                    .map(|d| d.text.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }
        };

        if ingredients.is_empty() {
            return Err(CoreError::Validation(
                "ingredients are required, either as text or as a readable label image"
                    .to_string(),
            ));
        }

        let response = self
            .llm_client
            .generate(build_analysis_prompt(&ingredients.join(", ")))
            .await?;

        let analysis = parse_analysis_response(&response);
        if analysis.is_empty() {
            return Err(CoreError::AnalysisFailed);
        }

        let report = AnalysisReport::from_map(&analysis);
        let score = health_score(&report);
        let review = overall_review(&report, score);
        let proprietary_claims = report
            .misleading_claims
            .iter()
            .map(|c| c.claim().to_string())
            .collect();
        let nutritional_info = analysis.get("NutritionalAnalysis").cloned();

        let product = Product::new(
            input.fields,
            ingredients,
            Some(serde_json::Value::Object(analysis)),
            nutritional_info,
            HealthScore { score, review },
            proprietary_claims,
        );

        info!(product_id = %product.id, score, "adding analyzed product");
        self.product_repository.create_product(product).await
    }

    async fn get_products(&self, filter: GetProductsFilter) -> Result<ProductPage, CoreError> {
        let page = filter.page.unwrap_or(1).max(1);
        let limit = filter
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1) * limit;

        let (products, total_products) = self
            .product_repository
            .fetch_products(filter, offset, limit)
            .await?;

        Ok(ProductPage {
            products,
            page,
            limit,
            total_pages: total_products.div_ceil(limit),
            total_products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label_analysis::entities::DetectedText;
    use crate::domain::label_analysis::ports::{MockLlmClient, MockOcrEngine};
    use crate::domain::product::entities::{ProductFields, WeightUnit};
    use crate::domain::product::ports::MockProductRepository;

    fn fields() -> ProductFields {
        ProductFields {
            product_name: "Choco Crunch".to_string(),
            product_qty: "1 pack".to_string(),
            brand_name: "Acme".to_string(),
            weightage: 250.0,
            weight_unit: WeightUnit::G,
            product_category: "Snacks".to_string(),
            image_url: None,
            purpose: Some("snacking".to_string()),
            frequency: Some("weekly".to_string()),
        }
    }

    fn analysis_reply() -> String {
        r#"{
            "NutritionalAnalysis": {
                "Macronutrients": { "Carbohydrates": { "Bad": ["added sugar"] } }
            },
            "MisleadingClaims": [
                { "Claim": "All natural", "Reason": "contains additives" },
                "No added sugar"
            ]
        }"#
        .to_string()
    }

    #[tokio::test]
    async fn manual_ingredients_are_split_and_persisted() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .withf(|prompt| prompt.contains("sugar, palm oil, salt"))
            .returning(|_| Box::pin(async { Ok(analysis_reply()) }));

        let mut repository = MockProductRepository::new();
        repository
            .expect_create_product()
            .withf(|product| {
                product.ingredients == ["sugar", "palm oil", "salt"]
                    && product.health_score.score == 95
                    && product.proprietary_claims == ["All natural", "No added sugar"]
                    && product.nutritional_info.is_some()
                    && product.analysis.is_some()
            })
            .returning(|product| Box::pin(async move { Ok(product) }));

        let service = Service::new(repository, llm, MockOcrEngine::new());
        let product = service
            .add_product(CreateProductInput {
                fields: fields(),
                ingredients: IngredientSource::Manual("sugar, palm oil , salt,".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(product.health_score.score, 95);
        assert!(product.health_score.review.contains("generally healthy"));
    }

    #[tokio::test]
    async fn label_image_ingredients_come_from_ocr() {
        let mut ocr = MockOcrEngine::new();
        ocr.expect_extract_text().returning(|_| {
            Box::pin(async {
                Ok(vec![
                    DetectedText {
                        text: "whole oats".to_string(),
                        coords: [[0.0; 2]; 4],
                    },
                    DetectedText {
                        text: "honey".to_string(),
                        coords: [[0.0; 2]; 4],
                    },
                ])
            })
        });

        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .withf(|prompt| prompt.contains("whole oats, honey"))
            .returning(|_| Box::pin(async { Ok(analysis_reply()) }));

        let mut repository = MockProductRepository::new();
        repository
            .expect_create_product()
            .returning(|product| Box::pin(async move { Ok(product) }));

        let service = Service::new(repository, llm, ocr);
        let product = service
            .add_product(CreateProductInput {
                fields: fields(),
                ingredients: IngredientSource::LabelImage(vec![1, 2, 3]),
            })
            .await
            .unwrap();

        assert_eq!(product.ingredients, ["whole oats", "honey"]);
    }

    #[tokio::test]
    async fn blank_ingredient_text_is_rejected() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate().never();

        let service = Service::new(MockProductRepository::new(), llm, MockOcrEngine::new());
        let result = service
            .add_product(CreateProductInput {
                fields: fields(),
                ingredients: IngredientSource::Manual(" , , ".to_string()),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn unparseable_analysis_fails_the_submission() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .returning(|_| Box::pin(async { Ok("no json here".to_string()) }));

        let mut repository = MockProductRepository::new();
        repository.expect_create_product().never();

        let service = Service::new(repository, llm, MockOcrEngine::new());
        let result = service
            .add_product(CreateProductInput {
                fields: fields(),
                ingredients: IngredientSource::Manual("water".to_string()),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::AnalysisFailed);
    }

    #[tokio::test]
    async fn pagination_computes_offset_and_page_count() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_fetch_products()
            .withf(|_, offset, limit| *offset == 20 && *limit == 10)
            .returning(|_, _, _| Box::pin(async { Ok((vec![], 25)) }));

        let service = Service::new(repository, MockLlmClient::new(), MockOcrEngine::new());
        let page = service
            .get_products(GetProductsFilter {
                page: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_products, 25);
    }

    #[tokio::test]
    async fn empty_catalog_has_zero_pages() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_fetch_products()
            .returning(|_, _, _| Box::pin(async { Ok((vec![], 0)) }));

        let service = Service::new(repository, MockLlmClient::new(), MockOcrEngine::new());
        let page = service.get_products(GetProductsFilter::default()).await.unwrap();

        assert_eq!(page.total_pages, 0);
        assert!(page.products.is_empty());
    }

    #[tokio::test]
    async fn oversized_limit_is_clamped() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_fetch_products()
            .withf(|_, offset, limit| *offset == 0 && *limit == 100)
            .returning(|_, _, _| Box::pin(async { Ok((vec![], 0)) }));

        let service = Service::new(repository, MockLlmClient::new(), MockOcrEngine::new());
        let page = service
            .get_products(GetProductsFilter {
                limit: Some(500),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.limit, 100);
    }
}
