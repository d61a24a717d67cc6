use crate::domain::common::services::Service;
use crate::domain::common::LabelwiseConfig;
use crate::infrastructure::db::postgres::Postgres;
use crate::infrastructure::llm::gemini_client::GeminiLlmClient;
use crate::infrastructure::ocr::tesseract_engine::TesseractOcrEngine;
use crate::infrastructure::product::repositories::product_repository::PostgresProductRepository;

pub type LabelwiseService = Service<PostgresProductRepository, GeminiLlmClient, TesseractOcrEngine>;

/// Wires the production adapters: Postgres storage (migrated on startup),
/// the Gemini client, and the Tesseract OCR engine.
pub async fn create_service(config: LabelwiseConfig) -> Result<LabelwiseService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;

    Ok(Service::new(
        PostgresProductRepository::new(postgres.get_db()),
        GeminiLlmClient::new(&config.llm),
        TesseractOcrEngine::new(&config.ocr),
    ))
}
