//! Prompt templates sent to the generation model

/// Instruction for a single sentiment reading.
///
/// Embeds the literal user text and pins the reply to one bare JSON object
/// with the three expected keys. Surrounding prose breaks the parser, so
/// the prompt forbids it explicitly; fenced replies still happen and are
/// handled downstream.
pub fn sentiment_prompt(input_text: &str) -> String {
    format!(
        "Analiza el siguiente texto y proporciona un análisis de sentimiento. \
IMPORTANTE: Debes responder SOLO con un objeto JSON válido, sin ningún texto adicional antes o después.\n\n\
Texto a analizar: \"{input_text}\"\n\n\
Responde ÚNICAMENTE con este formato JSON exacto (sin comillas adicionales ni caracteres extra):\n\
{{\n\
  \"emotion\": \"emoción principal (Felicidad, Tristeza, Ansiedad, Depresión, etc.)\",\n\
  \"diagnosis\": \"diagnóstico breve del estado emocional\",\n\
  \"recommendation\": \"recomendación o mensaje de apoyo apropiado\"\n\
}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_literal_input() {
        let p = sentiment_prompt("Hoy me siento muy triste y sin energía");
        assert!(p.contains("\"Hoy me siento muy triste y sin energía\""));
    }

    #[test]
    fn test_prompt_names_all_three_keys() {
        let p = sentiment_prompt("x");
        for key in ["\"emotion\"", "\"diagnosis\"", "\"recommendation\""] {
            assert!(p.contains(key), "prompt missing {key}");
        }
    }
}
