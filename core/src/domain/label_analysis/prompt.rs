/// Fixed analysis prompt. `{extracted_text}` is replaced with the text pulled
/// from the label (OCR lines or a joined ingredient list).
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"
You are a nutrition expert. Analyze the following product details extracted from a food label:

{extracted_text}

Provide the analysis split into the following sections, using JSON format:

{
  "NutritionalAnalysis": {
    "Macronutrients": {
      "Carbohydrates": {
        "Good": ["List of healthy carbohydrate sources with reasons"],
        "Bad": ["List of unhealthy carbohydrates like added sugars with reasons"]
      },
      "Proteins": {
        "Good": ["List of high-quality proteins with reasons"],
        "Bad": ["List of low-quality or harmful proteins with reasons"]
      },
      "Fats": {
        "Good": ["List of healthy fats (e.g., omega-3, unsaturated fats) with reasons"],
        "Bad": ["List of unhealthy fats (e.g., trans fats, saturated fats) with reasons"]
      },
      "Fiber": {
        "Good": ["List of good fiber sources and their benefits"]
      }
    },
    "Micronutrients": {
      "Vitamins": {
        "Good": ["List of vitamins that are beneficial and in appropriate amounts"],
        "Deficient": ["Vitamins that are lacking or insufficient in the product"]
      },
      "Minerals": {
        "Good": ["List of minerals that are beneficial and in appropriate amounts"],
        "Deficient": ["Minerals that are lacking or insufficient in the product"]
      }
    },
    "HealthRisks": ["Summarize potential health risks from overconsumption of specific nutrients or ingredients"],
    "HealthBenefits": ["Summarize potential health benefits of the product based on its composition"]
  },
  "ProcessingLevel": {
    "Description": "Describe how processed this product is and any nutrient deficiencies.",
    "Level": "Low/Medium/High",
    "Good": ["Positive aspects of processing, if any (e.g., fortified with vitamins)"],
    "Bad": ["Negative aspects of processing (e.g., artificial additives, preservatives)"]
  },
  "HarmfulIngredients": [
    {
      "Ingredient": "Name of the harmful ingredient",
      "Reason": "Why it is harmful"
    }
  ],
  "DietCompliance": {
    "CompliantDiets": ["List of diets the product complies with (e.g., vegan, keto, paleo)"],
    "NonCompliantDiets": ["List of diets the product does not comply with"],
    "Reasons": "Explanation for compliance or non-compliance with specific diets"
  },
  "DiabetesAllergenFriendly": {
    "IsSuitable": true,
    "Reasons": "Why it is or isn't suitable",
    "Allergens": ["List of allergens present"]
  },
  "SustainabilityAndEthics": {
    "Sustainability": "Describe whether the ingredients are sustainably sourced (e.g., palm oil, fish)",
    "EthicalConcerns": "Highlight any ethical concerns with the product ingredients (e.g., animal products, labor conditions)"
  },
  "RecommendedAlternatives": ["Suggest healthier or more sustainable alternatives to harmful ingredients"],
  "RegulatoryCompliance": {
    "FSSAI": "Is this product compliant with India FSSAI India regulations? true/false",
    "FDA": "Is this product compliant with US FDA regulations? true/false",
    "EFSA": "Is this product compliant with EU EFSA regulations? true/false",
    "OtherRegions": "Mention any other regional compliance issues"
  },
  "MisleadingClaims": ["List any potentially misleading claims made by the brand and explain why they may be misleading."],
  "AlternativeHomeMadeProcedure": {
    "Ingredients": ["List of required ingredients with measurements"],
    "Steps": ["Detailed step-by-step procedure to make the homemade product"]
  }
}

**Important Instructions:**

- Provide the result in **JSON format only**.
- Do **not** include any explanations, code snippets, disclaimers, or additional text.
- Do **not** include code fences (e.g., ```).
- Ensure the JSON is properly formatted and valid.
- For the "MisleadingClaims" section, provide each claim as an object with "Claim" and "Reason" keys.
"#;

pub fn build_analysis_prompt(extracted_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{extracted_text}", extracted_text)
}
