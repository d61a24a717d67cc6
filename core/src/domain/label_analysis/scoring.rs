use crate::domain::label_analysis::entities::AnalysisReport;

/// Derives the 0..=100 health score with fixed deductions:
/// 5 per bad macronutrient entry, 10 per harmful ingredient, 15 for high and
/// 5 for medium processing, 5 per non-compliant diet, floored at 0.
pub fn health_score(report: &AnalysisReport) -> u8 {
    let mut score: i32 = 100;

    let macros = &report.nutritional_analysis.macronutrients;
    let bad_nutrients = macros.carbohydrates.bad.len()
        + macros.proteins.bad.len()
        + macros.fats.bad.len()
        + macros.fiber.bad.len();
    score -= bad_nutrients as i32 * 5;

    score -= report.harmful_ingredients.len() as i32 * 10;

    match report.processing_level.level.to_lowercase().as_str() {
        "high" => score -= 15,
        "medium" => score -= 5,
        _ => {}
    }

    score -= report.diet_compliance.non_compliant_diets.len() as i32 * 5;

    score.clamp(0, 100) as u8
}

/// Renders the overall review as a fixed sequence of sentences: score tier,
/// processing level, harmful-ingredient presence, then diet compliance.
/// Empty components contribute nothing.
pub fn overall_review(report: &AnalysisReport, score: u8) -> String {
    let mut review: Vec<String> = Vec::new();

    if score > 80 {
        review.push("This product is generally healthy and well-balanced.".to_string());
    } else if score > 50 {
        review.push("This product is moderately healthy but has some areas of concern.".to_string());
    } else {
        review.push(
            "This product is not healthy and contains many harmful ingredients or nutrients."
                .to_string(),
        );
    }

    match report.processing_level.level.to_lowercase().as_str() {
        "high" => {
            review.push("It is highly processed, which can negatively impact health.".to_string())
        }
        "medium" => review.push("It is moderately processed.".to_string()),
        "low" => review.push("It is minimally processed.".to_string()),
        _ => {}
    }

    if report.harmful_ingredients.is_empty() {
        review.push("No harmful ingredients detected.".to_string());
    } else {
        review.push("Contains harmful ingredients that could pose health risks.".to_string());
    }

    let compliance = &report.diet_compliance;
    if !compliance.compliant_diets.is_empty() {
        review.push(format!(
            "Complies with the following diets: {}.",
            compliance.compliant_diets.join(", ")
        ));
    }
    if !compliance.non_compliant_diets.is_empty() {
        review.push(format!(
            "Does not comply with the following diets: {}.",
            compliance.non_compliant_diets.join(", ")
        ));
    }

    review.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(value: serde_json::Value) -> AnalysisReport {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_report_scores_perfect() {
        assert_eq!(health_score(&AnalysisReport::default()), 100);
    }

    #[test]
    fn deductions_accumulate_across_categories() {
        // k=3 bad macronutrients, h=2 harmful, level=high, d=1 non-compliant:
        // 100 - 15 - 20 - 15 - 5 = 45
        let report = report(json!({
            "NutritionalAnalysis": {
                "Macronutrients": {
                    "Carbohydrates": { "Bad": ["added sugar", "corn syrup"] },
                    "Fats": { "Bad": ["trans fat"] }
                }
            },
            "HarmfulIngredients": [
                { "Ingredient": "Red 40", "Reason": "artificial color" },
                { "Ingredient": "BHA", "Reason": "preservative" }
            ],
            "ProcessingLevel": { "Level": "High" },
            "DietCompliance": { "NonCompliantDiets": ["keto"] }
        }));
        assert_eq!(health_score(&report), 45);
    }

    #[test]
    fn medium_processing_deducts_five() {
        let report = report(json!({ "ProcessingLevel": { "Level": "MEDIUM" } }));
        assert_eq!(health_score(&report), 95);
    }

    #[test]
    fn unknown_processing_level_deducts_nothing() {
        let report = report(json!({ "ProcessingLevel": { "Level": "Ultra" } }));
        assert_eq!(health_score(&report), 100);
    }

    #[test]
    fn score_never_goes_negative() {
        let harmful: Vec<_> = (0..20)
            .map(|i| json!({ "Ingredient": format!("additive {i}"), "Reason": "bad" }))
            .collect();
        let report = report(json!({ "HarmfulIngredients": harmful }));
        assert_eq!(health_score(&report), 0);
    }

    #[test]
    fn review_matches_fixed_wording() {
        let report = report(json!({
            "ProcessingLevel": { "Level": "low" },
            "DietCompliance": { "CompliantDiets": ["vegan"] }
        }));
        assert_eq!(
            overall_review(&report, 90),
            "This product is generally healthy and well-balanced. \
             It is minimally processed. \
             No harmful ingredients detected. \
             Complies with the following diets: vegan."
        );
    }

    #[test]
    fn review_lists_non_compliant_diets() {
        let report = report(json!({
            "HarmfulIngredients": [{ "Ingredient": "MSG", "Reason": "flavor enhancer" }],
            "DietCompliance": { "NonCompliantDiets": ["vegan", "kosher"] }
        }));
        let review = overall_review(&report, 40);
        assert!(review.starts_with(
            "This product is not healthy and contains many harmful ingredients or nutrients."
        ));
        assert!(review.contains("Contains harmful ingredients that could pose health risks."));
        assert!(review.ends_with("Does not comply with the following diets: vegan, kosher."));
    }

    #[test]
    fn unrecognized_level_emits_no_processing_sentence() {
        let review = overall_review(&AnalysisReport::default(), 60);
        assert_eq!(
            review,
            "This product is moderately healthy but has some areas of concern. \
             No harmful ingredients detected."
        );
    }
}
