use crate::request::GenerationRequest;
use crate::slides::SlideDraft;

// Fixed qualifiers appended to every image prompt so a carousel's imagery
// stays visually consistent regardless of where the prompt came from.
static STYLE_QUALIFIERS: &str = "cinematic, premium, editorial lighting";
static NEGATIVE_QUALIFIERS: &str =
    "no text, no letters, no logos, no watermark";

/// Renders the generation instruction for the text model, embedding the
/// required output shape. Pure; snapshot-testable.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Você é um estrategista de conteúdo especialista em criar carrosséis virais para Instagram.
Gere um carrossel com exatamente {total} slides sobre o seguinte tema:

TEMA: {topic}

REGRAS OBRIGATÓRIAS:
- Responda APENAS com um JSON válido, sem texto antes ou depois, sem blocos de código markdown
- Cada slide deve ter: "title" (título curto e impactante, máximo 6 palavras), "body" (2 a 3 frases explicativas, conteúdo denso e valioso) e "imagePrompt" (descrição visual da cena para um modelo de geração de imagens)
- O primeiro slide deve ser um gancho forte que prenda a atenção
- O último slide deve ter uma call-to-action clara (ex: seguir, salvar, comentar)
- Tom: autoridade, direto, transformador
- Idioma: Português Brasileiro em "title" e "body"; "imagePrompt" sempre em inglês

FORMATO EXATO DE RESPOSTA (sem nenhum caractere fora deste JSON):
{{
  "slides": [
    {{ "title": "Título do Slide 1", "body": "Texto descritivo do slide 1.", "imagePrompt": "Scene description in English." }},
    {{ "title": "Título do Slide 2", "body": "Texto descritivo do slide 2.", "imagePrompt": "Scene description in English." }}
  ]
}}"#,
        total = request.slide_count(),
        topic = request.topic(),
    )
}

/// Prompt for one slide's image: the draft's own `imagePrompt` when the
/// model supplied one, else a composition of topic, title and body.
pub fn build_image_prompt(topic: &str, draft: &SlideDraft) -> String {
    let subject = match draft.image_prompt.as_deref().map(str::trim) {
        Some(prompt) if !prompt.is_empty() => prompt.to_string(),
        _ => format!("{}. {}. {}", topic, draft.title, draft.body),
    };

    format!("{}. {}. {}", subject, STYLE_QUALIFIERS, NEGATIVE_QUALIFIERS)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::request::GenerationRequest;

    use super::*;

    fn draft(image_prompt: Option<&str>) -> SlideDraft {
        SlideDraft {
            title: "O erro mais comum".to_string(),
            body: "Quase todo mundo começa pelo fim.".to_string(),
            image_prompt: image_prompt.map(str::to_string),
        }
    }

    #[test]
    fn test_prompt_embeds_topic_and_count() {
        let request = GenerationRequest::from_value(
            &json!({"topic": "produtividade", "total": 7}),
        )
        .unwrap();

        let prompt = build_prompt(&request);

        assert!(prompt.contains("exatamente 7 slides"));
        assert!(prompt.contains("TEMA: produtividade"));
        assert!(prompt.contains("\"slides\""));
        assert!(prompt.contains("sem blocos de código markdown"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = GenerationRequest::from_value(
            &json!({"topic": "vendas", "total": 5}),
        )
        .unwrap();

        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_image_prompt_prefers_draft_prompt() {
        let prompt = build_image_prompt(
            "produtividade",
            &draft(Some("A desk covered in sticky notes")),
        );

        assert!(prompt.starts_with("A desk covered in sticky notes"));
        assert!(prompt.contains("cinematic, premium, editorial lighting"));
        assert!(prompt.ends_with("no text, no letters, no logos, no watermark"));
    }

    #[test]
    fn test_image_prompt_falls_back_to_slide_text() {
        for missing in [None, Some(""), Some("   ")] {
            let prompt = build_image_prompt("produtividade", &draft(missing));

            assert!(prompt.starts_with(
                "produtividade. O erro mais comum. Quase todo mundo"
            ));
            assert!(prompt.contains("no watermark"));
        }
    }
}
