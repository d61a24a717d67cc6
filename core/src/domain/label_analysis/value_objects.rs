use serde_json::{Map, Value};

pub struct AnalyzeLabelInput {
    pub image: Vec<u8>,
}

/// Result of a full label analysis: the raw analysis object exactly as the
/// model produced it, plus the annotated source image as JPEG bytes.
#[derive(Debug)]
pub struct LabelAnalysis {
    pub analysis: Map<String, Value>,
    pub highlighted_image: Vec<u8>,
}
