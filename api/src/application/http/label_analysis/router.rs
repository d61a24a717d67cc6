use axum::Router;
use axum::routing::post;
use utoipa::OpenApi;

use super::handlers::analyze_label::{__path_analyze_label, analyze_label};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_label))]
pub struct LabelAnalysisApiDoc;

pub fn label_analysis_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_label))
}
