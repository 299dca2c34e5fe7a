use crate::slides::SlideDraft;

/// Deterministic local slide content, used whenever no text provider is
/// configured or the remote call failed. The first slide is always the
/// hook and the last always the call-to-action; counts above the base
/// template repeat a generic "apply it" slide before the CTA. Output
/// length always equals `slide_count`.
pub fn fallback_slides(topic: &str, slide_count: usize) -> Vec<SlideDraft> {
    let hook = SlideDraft {
        title: format!("A verdade sobre {}", topic),
        body: format!(
            "A maioria das pessoas trava quando o assunto é {}. Nos \
             próximos slides você vai ver o que realmente funciona.",
            topic
        ),
        image_prompt: None,
    };

    let middle = [
        SlideDraft {
            title: "O erro mais comum".to_string(),
            body: format!(
                "Quase todo mundo aborda {} do jeito errado e desiste cedo \
                 demais. Reconhecer esse erro é o primeiro passo para \
                 avançar.",
                topic
            ),
            image_prompt: None,
        },
        SlideDraft {
            title: "A estratégia que funciona".to_string(),
            body: format!(
                "Em vez de tentar tudo ao mesmo tempo, escolha uma frente \
                 de {} e domine o básico primeiro. Consistência vence \
                 intensidade.",
                topic
            ),
            image_prompt: None,
        },
        SlideDraft {
            title: "Como executar".to_string(),
            body: format!(
                "Reserve 30 minutos por dia para trabalhar em {}. Registre \
                 o progresso e ajuste a rota toda semana.",
                topic
            ),
            image_prompt: None,
        },
    ];

    let cta = SlideDraft {
        title: "Gostou? Salve este post".to_string(),
        body: format!(
            "Se este conteúdo sobre {} te ajudou, salve para rever depois \
             e compartilhe com quem precisa. Siga o perfil para mais.",
            topic
        ),
        image_prompt: None,
    };

    let mut slides = Vec::with_capacity(slide_count);
    slides.push(hook);

    for slide in middle {
        if slides.len() < slide_count - 1 {
            slides.push(slide);
        }
    }

    while slides.len() < slide_count - 1 {
        slides.push(SlideDraft {
            title: "Coloque em prática".to_string(),
            body: format!(
                "Escolha uma ideia deste carrossel e aplique em {} ainda \
                 hoje. Uma ação pequena feita agora vale mais que um plano \
                 perfeito.",
                topic
            ),
            image_prompt: None,
        });
    }

    slides.push(cta);
    slides
}
