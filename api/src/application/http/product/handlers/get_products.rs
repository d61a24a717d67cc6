use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use labelwise_core::domain::product::entities::Product;
use labelwise_core::domain::product::ports::ProductService;
use labelwise_core::domain::product::value_objects::GetProductsFilter;

use crate::application::http::product::validators::GetProductsParams;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProductsResponse {
    pub products: Vec<Product>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_products: u64,
}

#[utoipa::path(
    get,
    path = "/get_products",
    tag = "product",
    summary = "List products",
    description = "Lists stored products with optional field filters and pagination, newest first",
    params(GetProductsParams),
    responses(
        (status = 200, body = GetProductsResponse)
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<GetProductsParams>,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let page = state
        .service
        .get_products(GetProductsFilter {
            product_name: params.product_name,
            brand_name: params.brand_name,
            product_category: params.product_category,
            purpose: params.purpose,
            frequency: params.frequency,
            page: params.page,
            limit: params.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse {
        products: page.products,
        page: page.page,
        limit: page.limit,
        total_pages: page.total_pages,
        total_products: page.total_products,
    }))
}
