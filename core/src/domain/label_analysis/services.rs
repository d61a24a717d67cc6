use tracing::info;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::common::services::Service;
use crate::domain::label_analysis::entities::AnalysisReport;
use crate::domain::label_analysis::highlight::highlight_label;
use crate::domain::label_analysis::parser::parse_analysis_response;
use crate::domain::label_analysis::ports::{LabelAnalysisService, LlmClient, OcrEngine};
use crate::domain::label_analysis::prompt::build_analysis_prompt;
use crate::domain::label_analysis::value_objects::{AnalyzeLabelInput, LabelAnalysis};

impl<P, L, O> LabelAnalysisService for Service<P, L, O>
where
    P: Send + Sync,
    L: LlmClient,
    O: OcrEngine,
{
    async fn analyze_label(&self, input: AnalyzeLabelInput) -> Result<LabelAnalysis, CoreError> {
        let detections = self.ocr_engine.extract_text(&input.image).await?;
        if detections.is_empty() {
            return Err(CoreError::NoTextDetected);
        }
        info!("recognized {} text regions on the label", detections.len());

        let extracted_text = detections
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let response = self
            .llm_client
            .generate(build_analysis_prompt(&extracted_text))
            .await?;

        let analysis = parse_analysis_response(&response);
        if analysis.is_empty() {
            return Err(CoreError::AnalysisFailed);
        }

        let report = AnalysisReport::from_map(&analysis);
        let highlighted_image = highlight_label(&input.image, &detections, &report)?;

        Ok(LabelAnalysis {
            analysis,
            highlighted_image,
        })
    }
}
