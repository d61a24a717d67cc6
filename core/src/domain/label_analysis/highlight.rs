use std::collections::HashSet;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb};
use imageproc::drawing::draw_line_segment_mut;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::label_analysis::entities::{AnalysisReport, DetectedText};
use crate::domain::label_analysis::text::normalize_text;

const HARMFUL_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const NEUTRAL_COLOR: Rgb<u8> = Rgb([255, 165, 0]);
#[allow(dead_code)]
const BENEFICIAL_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draws a box around every detected text region: red for regions matching a
/// harmful ingredient from the analysis, orange otherwise. Returns the
/// annotated image as JPEG bytes.
pub fn highlight_label(
    image_bytes: &[u8],
    detections: &[DetectedText],
    report: &AnalysisReport,
) -> Result<Vec<u8>, CoreError> {
    let image = image::load_from_memory(image_bytes)
        .map_err(|e| CoreError::Internal(format!("could not decode image: {e}")))?;
    let mut canvas = image.to_rgb8();

    let harmful: HashSet<String> = report
        .harmful_ingredients
        .iter()
        .map(|h| normalize_text(&h.ingredient))
        .filter(|s| !s.is_empty())
        .collect();

    for detection in detections {
        draw_quad(
            &mut canvas,
            &detection.coords,
            region_color(&detection.text, &harmful),
        );
    }

    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut out, ImageFormat::Jpeg)
        .map_err(|e| CoreError::Internal(format!("could not encode highlighted image: {e}")))?;

    Ok(out.into_inner())
}

/// Red only when the whole normalized line equals a harmful-ingredient name;
/// a line merely mentioning one stays neutral.
fn region_color(text: &str, harmful: &HashSet<String>) -> Rgb<u8> {
    if harmful.contains(&normalize_text(text)) {
        HARMFUL_COLOR
    } else {
        NEUTRAL_COLOR
    }
}

fn draw_quad(canvas: &mut image::RgbImage, coords: &[[f32; 2]; 4], color: Rgb<u8>) {
    for i in 0..4 {
        let from = coords[i];
        let to = coords[(i + 1) % 4];
        draw_line_segment_mut(canvas, (from[0], from[1]), (to[0], to[1]), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::new_rgb8(64, 64)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn produces_jpeg_output() {
        let detections = vec![DetectedText {
            text: "palm oil".to_string(),
            coords: [[4.0, 4.0], [40.0, 4.0], [40.0, 16.0], [4.0, 16.0]],
        }];
        let report = serde_json::from_value(serde_json::json!({
            "HarmfulIngredients": [{ "Ingredient": "Palm Oil", "Reason": "saturated fat" }]
        }))
        .unwrap();

        let out = highlight_label(&sample_image(), &detections, &report).unwrap();
        assert_eq!(&out[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn only_exact_line_matches_are_marked_harmful() {
        let harmful = HashSet::from(["palm oil".to_string()]);
        assert_eq!(region_color("Palm  Oil", &harmful), HARMFUL_COLOR);
        assert_eq!(region_color("contains palm oil extract", &harmful), NEUTRAL_COLOR);
        assert_eq!(region_color("sea salt", &harmful), NEUTRAL_COLOR);
    }

    #[test]
    fn no_detections_still_returns_image() {
        let out = highlight_label(&sample_image(), &[], &AnalysisReport::default()).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn undecodable_bytes_are_rejected() {
        let result = highlight_label(b"not an image", &[], &AnalysisReport::default());
        assert!(matches!(result, Err(CoreError::Internal(_))));
    }
}
