use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::label_analysis::entities::DetectedText;
use crate::domain::label_analysis::value_objects::{AnalyzeLabelInput, LabelAnalysis};

/// Text generation backend. Each call is self-contained; no conversation
/// state is kept between requests.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// OCR backend: recognizes text regions in an encoded image.
#[cfg_attr(test, mockall::automock)]
pub trait OcrEngine: Send + Sync {
    fn extract_text(
        &self,
        image: &[u8],
    ) -> impl Future<Output = Result<Vec<DetectedText>, CoreError>> + Send;
}

pub trait LabelAnalysisService: Send + Sync {
    fn analyze_label(
        &self,
        input: AnalyzeLabelInput,
    ) -> impl Future<Output = Result<LabelAnalysis, CoreError>> + Send;
}
