//! Edge-case tests for model reply cleaning and parsing

use emofind_core::clients::gemini::{parse_sentiment, strip_code_fences};
use emofind_core::error::EmofindError;

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: &str = r#"{"emotion":"Tristeza","diagnosis":"Estado de ánimo bajo","recommendation":"Buscar apoyo"}"#;

    #[test]
    fn test_unfenced_reply_parses() {
        let analysis = parse_sentiment(FLAT).unwrap();
        assert_eq!(analysis.emotion, "Tristeza");
        assert_eq!(analysis.diagnosis, "Estado de ánimo bajo");
        assert_eq!(analysis.recommendation, "Buscar apoyo");
    }

    #[test]
    fn test_fence_variants_all_parse_identically() {
        let expected = parse_sentiment(FLAT).unwrap();
        let variants = [
            format!("```json\n{FLAT}\n```"),
            format!("```json{FLAT}```"),
            format!("```\n{FLAT}\n```"),
            format!("\n\n  ```json\n{FLAT}\n```\n  "),
        ];
        for v in &variants {
            assert_eq!(parse_sentiment(v).unwrap(), expected, "variant failed: {v:?}");
        }
    }

    #[test]
    fn test_strip_is_order_independent_of_whitespace() {
        let fenced = format!("   ```json\n{FLAT}\n```   ");
        let inner = strip_code_fences(&fenced);
        assert_eq!(inner, FLAT);
    }

    #[test]
    fn test_empty_reply_is_response_format() {
        let err = parse_sentiment("").unwrap_err();
        assert!(matches!(err, EmofindError::ResponseFormat { .. }));
    }

    #[test]
    fn test_fences_with_no_payload_is_response_format() {
        let err = parse_sentiment("```json\n```").unwrap_err();
        assert!(matches!(err, EmofindError::ResponseFormat { .. }));
    }

    #[test]
    fn test_json_array_is_response_format() {
        // A valid JSON payload that is not an object carries no fields
        let err = parse_sentiment(r#"["Tristeza","bajo","apoyo"]"#).unwrap_err();
        assert!(matches!(err, EmofindError::ResponseFormat { .. }));
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let extra = r#"{"emotion":"Ansiedad","diagnosis":"Tensión","recommendation":"Respirar","confidence":0.9}"#;
        let analysis = parse_sentiment(extra).unwrap();
        assert_eq!(analysis.emotion, "Ansiedad");
    }
}
