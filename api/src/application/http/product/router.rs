use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;

use super::handlers::add_product::{__path_add_product, add_product};
use super::handlers::get_products::{__path_get_products, get_products};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(add_product, get_products))]
pub struct ProductApiDoc;

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/add_product", post(add_product))
        .route("/get_products", get(get_products))
}
