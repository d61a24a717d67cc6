use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One line of OCR output: the recognized text plus the four corners of its
/// bounding quad, in source-image pixel coordinates, clockwise from top-left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedText {
    pub text: String,
    pub coords: [[f32; 2]; 4],
}

/// Typed view of the LLM's nutrition analysis.
///
/// Every field defaults when the model omits it; scoring and review never
/// need existence checks. The JSON keys follow the analysis prompt, which
/// asks for PascalCase sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    #[serde(rename = "NutritionalAnalysis")]
    pub nutritional_analysis: NutritionalAnalysis,
    #[serde(rename = "ProcessingLevel")]
    pub processing_level: ProcessingLevel,
    #[serde(rename = "HarmfulIngredients")]
    pub harmful_ingredients: Vec<HarmfulIngredient>,
    #[serde(rename = "DietCompliance")]
    pub diet_compliance: DietCompliance,
    #[serde(rename = "DiabetesAllergenFriendly")]
    pub allergen_info: AllergenInfo,
    #[serde(rename = "SustainabilityAndEthics")]
    pub sustainability: SustainabilityEthics,
    #[serde(rename = "RecommendedAlternatives")]
    pub recommended_alternatives: Vec<String>,
    #[serde(rename = "RegulatoryCompliance")]
    pub regulatory_compliance: RegulatoryCompliance,
    #[serde(rename = "MisleadingClaims")]
    pub misleading_claims: Vec<MisleadingClaim>,
    #[serde(rename = "AlternativeHomeMadeProcedure")]
    pub homemade_alternative: Option<HomemadeRecipe>,
}

impl AnalysisReport {
    /// Builds the typed report from the decoded response object. A reply that
    /// does not fit the expected shape degrades to defaults rather than
    /// failing the request; the raw object is still returned to clients.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        serde_json::from_value(Value::Object(map.clone())).unwrap_or_else(|e| {
            tracing::warn!("analysis response did not match expected shape: {}", e);
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionalAnalysis {
    #[serde(rename = "Macronutrients")]
    pub macronutrients: Macronutrients,
    #[serde(rename = "Micronutrients")]
    pub micronutrients: Micronutrients,
    #[serde(rename = "HealthRisks")]
    pub health_risks: Vec<String>,
    #[serde(rename = "HealthBenefits")]
    pub health_benefits: Vec<String>,
    pub serving_size: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Macronutrients {
    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: NutrientBreakdown,
    #[serde(rename = "Proteins")]
    pub proteins: NutrientBreakdown,
    #[serde(rename = "Fats")]
    pub fats: NutrientBreakdown,
    #[serde(rename = "Fiber")]
    pub fiber: NutrientBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientBreakdown {
    #[serde(rename = "Good")]
    pub good: Vec<String>,
    #[serde(rename = "Bad")]
    pub bad: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Micronutrients {
    #[serde(rename = "Vitamins")]
    pub vitamins: MicronutrientBreakdown,
    #[serde(rename = "Minerals")]
    pub minerals: MicronutrientBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicronutrientBreakdown {
    #[serde(rename = "Good")]
    pub good: Vec<String>,
    #[serde(rename = "Deficient")]
    pub deficient: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingLevel {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Good")]
    pub good: Vec<String>,
    #[serde(rename = "Bad")]
    pub bad: Vec<String>,
}

impl Default for ProcessingLevel {
    fn default() -> Self {
        Self {
            description: String::new(),
            level: "Unknown".to_string(),
            good: Vec::new(),
            bad: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmfulIngredient {
    #[serde(rename = "Ingredient")]
    pub ingredient: String,
    #[serde(rename = "Reason")]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietCompliance {
    #[serde(rename = "CompliantDiets")]
    pub compliant_diets: Vec<String>,
    #[serde(rename = "NonCompliantDiets")]
    pub non_compliant_diets: Vec<String>,
    #[serde(rename = "Reasons")]
    pub reasons: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllergenInfo {
    #[serde(rename = "IsSuitable")]
    pub is_suitable: bool,
    #[serde(rename = "Reasons")]
    pub reasons: String,
    #[serde(rename = "Allergens")]
    pub allergens: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SustainabilityEthics {
    #[serde(rename = "Sustainability")]
    pub sustainability: String,
    #[serde(rename = "EthicalConcerns")]
    pub ethical_concerns: String,
}

/// Regulator verdicts arrive as booleans or prose depending on the model's
/// mood, so they are carried as raw values and never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryCompliance {
    #[serde(rename = "FSSAI")]
    pub fssai: Value,
    #[serde(rename = "FDA")]
    pub fda: Value,
    #[serde(rename = "EFSA")]
    pub efsa: Value,
    #[serde(rename = "OtherRegions")]
    pub other_regions: Value,
}

/// The prompt asks for `{Claim, Reason}` objects, but the model sometimes
/// answers with bare strings; both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MisleadingClaim {
    Detailed {
        #[serde(rename = "Claim")]
        claim: String,
        #[serde(rename = "Reason", default)]
        reason: String,
    },
    Text(String),
}

impl MisleadingClaim {
    pub fn claim(&self) -> &str {
        match self {
            MisleadingClaim::Detailed { claim, .. } => claim,
            MisleadingClaim::Text(claim) => claim,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomemadeRecipe {
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,
    #[serde(rename = "Steps")]
    pub steps: Vec<String>,
}

/// Derived health verdict, persisted only inside a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthScore {
    pub score: u8,
    pub review: String,
}
