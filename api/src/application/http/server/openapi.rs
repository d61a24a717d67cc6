use utoipa::OpenApi;

use crate::application::http::health::HealthApiDoc;
use crate::application::http::label_analysis::router::LabelAnalysisApiDoc;
use crate::application::http::product::router::ProductApiDoc;

#[derive(OpenApi)]
#[openapi(info(
    title = "Labelwise API",
    description = "Food label OCR, nutrition analysis, and product catalog"
))]
pub struct ApiDoc;

/// Combined OpenAPI document: each HTTP module contributes its own `ApiDoc`.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(HealthApiDoc::openapi());
    doc.merge(LabelAnalysisApiDoc::openapi());
    doc.merge(ProductApiDoc::openapi());
    doc
}
