/// Lower-cases and collapses all whitespace runs to single spaces, so OCR
/// output and LLM-reported ingredient names compare case-insensitively.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_text("  High  FRUCTOSE\tCorn\nSyrup "), "high fructose corn syrup");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_text("   "), "");
    }
}
