use std::collections::HashMap;

use tesseract::Tesseract;
use tracing::error;

use crate::domain::common::OcrConfig;
use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::label_analysis::entities::DetectedText;
use crate::domain::label_analysis::ports::OcrEngine;

/// Tesseract-backed OCR adapter. Recognition is CPU-bound and the C API is
/// not thread-safe, so each call builds its own engine on a blocking thread.
#[derive(Debug, Clone)]
pub struct TesseractOcrEngine {
    language: String,
}

impl TesseractOcrEngine {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            language: config.language.clone(),
        }
    }
}

impl OcrEngine for TesseractOcrEngine {
    async fn extract_text(&self, image: &[u8]) -> Result<Vec<DetectedText>, CoreError> {
        let language = self.language.clone();
        let image = image.to_vec();

        let tsv = tokio::task::spawn_blocking(move || recognize_tsv(&language, &image))
            .await
            .map_err(|e| CoreError::Internal(format!("ocr task panicked: {e}")))??;

        Ok(parse_tsv(&tsv))
    }
}

fn ocr_error<E: std::fmt::Display>(e: E) -> CoreError {
    error!("tesseract failed: {}", e);
    CoreError::Internal(format!("ocr engine failed: {e}"))
}

fn recognize_tsv(language: &str, image: &[u8]) -> Result<String, CoreError> {
    Tesseract::new(None, Some(language))
        .map_err(|e| CoreError::Internal(format!("ocr engine could not be initialized: {e}")))?
        .set_image_from_mem(image)
        .map_err(ocr_error)?
        .recognize()
        .map_err(ocr_error)?
        .get_tsv_text(0)
        .map_err(ocr_error)
}

#[derive(Debug)]
struct WordBox {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    text: String,
}

/// Folds Tesseract's word-level TSV rows into one detection per text line.
///
/// TSV columns: level, page, block, par, line, word, left, top, width,
/// height, conf, text. Word rows have level 5; rows with negative confidence
/// or blank text are layout artifacts and skipped. Each line's box is the
/// union of its word boxes.
fn parse_tsv(tsv: &str) -> Vec<DetectedText> {
    let mut order: Vec<(u32, u32, u32)> = Vec::new();
    let mut lines: HashMap<(u32, u32, u32), Vec<WordBox>> = HashMap::new();

    for row in tsv.lines() {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() < 12 || fields[0] != "5" {
            continue;
        }

        let parsed = (
            fields[2].parse::<u32>(),
            fields[3].parse::<u32>(),
            fields[4].parse::<u32>(),
            fields[6].parse::<f32>(),
            fields[7].parse::<f32>(),
            fields[8].parse::<f32>(),
            fields[9].parse::<f32>(),
            fields[10].parse::<f32>(),
        );
        let (Ok(block), Ok(par), Ok(line), Ok(left), Ok(top), Ok(width), Ok(height), Ok(conf)) =
            parsed
        else {
            continue;
        };

        let text = fields[11].trim();
        if conf < 0.0 || text.is_empty() {
            continue;
        }

        let key = (block, par, line);
        let entry = lines.entry(key).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        entry.push(WordBox {
            left,
            top,
            right: left + width,
            bottom: top + height,
            text: text.to_string(),
        });
    }

    order
        .into_iter()
        .filter_map(|key| {
            let words = lines.remove(&key)?;
            let text = words
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            let left = words.iter().map(|w| w.left).fold(f32::INFINITY, f32::min);
            let top = words.iter().map(|w| w.top).fold(f32::INFINITY, f32::min);
            let right = words
                .iter()
                .map(|w| w.right)
                .fold(f32::NEG_INFINITY, f32::max);
            let bottom = words
                .iter()
                .map(|w| w.bottom)
                .fold(f32::NEG_INFINITY, f32::max);

            Some(DetectedText {
                text,
                coords: [[left, top], [right, top], [right, bottom], [left, bottom]],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    #[test]
    fn words_on_one_line_are_merged() {
        let tsv = format!(
            "{HEADER}\n\
             5\t1\t1\t1\t1\t1\t10\t20\t40\t12\t95\tpalm\n\
             5\t1\t1\t1\t1\t2\t55\t21\t30\t11\t93\toil"
        );
        let detections = parse_tsv(&tsv);
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].text, "palm oil");
        assert_eq!(
            detections[0].coords,
            [[10.0, 20.0], [85.0, 20.0], [85.0, 32.0], [10.0, 32.0]]
        );
    }

    #[test]
    fn separate_lines_produce_separate_detections() {
        let tsv = format!(
            "{HEADER}\n\
             5\t1\t1\t1\t1\t1\t0\t0\t20\t10\t90\tsugar\n\
             5\t1\t1\t1\t2\t1\t0\t15\t20\t10\t90\tsalt"
        );
        let detections = parse_tsv(&tsv);
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].text, "sugar");
        assert_eq!(detections[1].text, "salt");
    }

    #[test]
    fn low_confidence_and_structural_rows_are_skipped() {
        let tsv = format!(
            "{HEADER}\n\
             4\t1\t1\t1\t1\t0\t0\t0\t100\t20\t-1\t\n\
             5\t1\t1\t1\t1\t1\t0\t0\t20\t10\t-1\tnoise\n\
             5\t1\t1\t1\t1\t2\t0\t0\t20\t10\t88\t "
        );
        assert!(parse_tsv(&tsv).is_empty());
    }

    #[test]
    fn empty_tsv_yields_no_detections() {
        assert!(parse_tsv(HEADER).is_empty());
    }
}
