use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use gemini::models::{
    text_generation::{GenerateContentRequest, TextGeneration},
    text_to_image::TextToImage,
    StatusError,
};
use tokio::time::timeout;
use tracing::{info, warn};

use crate::{
    error::CarouselError,
    fallback::fallback_slides,
    images::{render_all, IMAGE_TIMEOUT},
    parse::parse_slides,
    prompt::build_prompt,
    request::GenerationRequest,
    slides::{GenerationResult, Slide, SlideDraft},
};

/// Generative endpoints have highly variable latency; an unbounded wait
/// would hang the whole request.
pub const TEXT_TIMEOUT: Duration = Duration::from_secs(25);

static WARN_FALLBACK: &str =
    "A IA de texto não estava disponível; o conteúdo foi gerado localmente.";
static WARN_FEWER_SLIDES: &str =
    "A IA retornou menos slides do que o solicitado.";
static WARN_MISSING_IMAGES: &str =
    "Não foi possível gerar a imagem de alguns slides.";

/// Runs the whole pipeline for one request.
///
/// A missing or failing text provider degrades to local fallback content;
/// a missing image provider leaves every `image` null; individual image
/// failures null out only their own position. Every degradation is
/// reported via `warning`, never as a request failure.
pub async fn generate<T, I>(
    text: Option<&T>,
    image: Option<&I>,
    request: &GenerationRequest,
) -> GenerationResult
where
    T: TextGeneration,
    I: TextToImage,
{
    let mut warnings = Vec::new();

    let drafts = match text {
        None => {
            info!("no text provider configured, using local content");
            warnings.push(WARN_FALLBACK);
            fallback_slides(request.topic(), request.slide_count())
        }
        Some(client) => match text_stage(client, request).await {
            Ok(drafts) => {
                if drafts.len() < request.slide_count() {
                    warnings.push(WARN_FEWER_SLIDES);
                }
                drafts
            }
            Err(e) => {
                warn!("text stage failed, using local content: {}", e);
                warnings.push(WARN_FALLBACK);
                fallback_slides(request.topic(), request.slide_count())
            }
        },
    };

    let slides: Vec<Slide> = match image {
        None => drafts
            .into_iter()
            .map(|draft| Slide::new(draft, None))
            .collect(),
        Some(client) => {
            let images =
                render_all(client, request.topic(), &drafts, IMAGE_TIMEOUT)
                    .await;

            // positional zip; a length mismatch is a programming error
            debug_assert_eq!(images.len(), drafts.len());

            if images.iter().any(Option::is_none) {
                warnings.push(WARN_MISSING_IMAGES);
            }

            drafts
                .into_iter()
                .zip(images)
                .map(|(draft, image)| {
                    let image = image
                        .map(|i| data_uri(&i.mime_type, &i.bytes));
                    Slide::new(draft, image)
                })
                .collect()
        }
    };

    GenerationResult {
        slides,
        warning: join_warnings(&warnings),
    }
}

async fn text_stage<T: TextGeneration>(
    client: &T,
    request: &GenerationRequest,
) -> Result<Vec<SlideDraft>, CarouselError> {
    let prompt = build_prompt(request);

    let response = timeout(
        TEXT_TIMEOUT,
        client.gemini_1_5_flash(GenerateContentRequest::from_prompt(&prompt)),
    )
    .await
    .map_err(|_| CarouselError::ProviderTimeout(TEXT_TIMEOUT))?
    .map_err(|e| match e.downcast::<StatusError>() {
        Ok(status) => CarouselError::Provider {
            status: Some(status.status),
            body: status.body,
        },
        Err(other) => CarouselError::Provider {
            status: None,
            body: format!("{:?}", other),
        },
    })?;

    let raw = response.text().ok_or_else(|| {
        CarouselError::Parse("resposta sem conteúdo gerado".to_string())
    })?;

    parse_slides(raw, request.slide_count())
}

fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

fn join_warnings(warnings: &[&str]) -> Option<String> {
    if warnings.is_empty() {
        None
    } else {
        Some(warnings.join(" "))
    }
}

#[cfg(test)]
mod test {
    use anyhow::bail;
    use bytes::Bytes;
    use gemini::models::text_generation::{
        Candidate, Content, GenerateContentResponse, Part,
    };
    use gemini::models::text_to_image::{
        TextToImageRequest, TextToImageResponse,
    };
    use serde_json::json;

    use super::*;

    struct FakeText {
        raw: String,
    }

    impl FakeText {
        fn new(raw: &str) -> Self {
            Self {
                raw: raw.to_string(),
            }
        }
    }

    impl TextGeneration for FakeText {
        async fn gemini_1_5_flash(
            &self,
            _request: GenerateContentRequest,
        ) -> anyhow::Result<GenerateContentResponse> {
            Ok(GenerateContentResponse {
                candidates: vec![Candidate {
                    content: Some(Content {
                        parts: vec![Part {
                            text: self.raw.clone(),
                        }],
                    }),
                }],
            })
        }
    }

    struct FakeImages {
        fail_marker: Option<&'static str>,
    }

    impl TextToImage for FakeImages {
        async fn imagen_3_generate(
            &self,
            request: TextToImageRequest,
        ) -> anyhow::Result<TextToImageResponse> {
            if let Some(marker) = self.fail_marker {
                if request.instances[0].prompt.contains(marker) {
                    bail!("status code: 500, response: boom");
                }
            }

            Ok(TextToImageResponse {
                mime_type: "image/png".to_string(),
                bytes: Bytes::from_static(b"png-bytes"),
            })
        }
    }

    fn request(topic: &str, total: i64) -> GenerationRequest {
        GenerationRequest::from_value(&json!({
            "topic": topic,
            "total": total,
        }))
        .unwrap()
    }

    fn five_slides_json() -> String {
        let slides: Vec<_> = (1..=5)
            .map(|i| {
                json!({
                    "title": format!("Slide {}", i),
                    "body": format!("Corpo do slide {}.", i),
                    "imagePrompt": format!("Scene {}", i),
                })
            })
            .collect();

        json!({ "slides": slides }).to_string()
    }

    #[tokio::test]
    async fn test_live_text_without_image_provider() {
        let text = FakeText::new(&five_slides_json());

        let result = generate(
            Some(&text),
            None::<&FakeImages>,
            &request("produtividade", 5),
        )
        .await;

        assert_eq!(result.slides.len(), 5);
        assert!(result.slides.iter().all(|s| s.image.is_none()));
        assert_eq!(result.warning, None);
    }

    #[tokio::test]
    async fn test_non_json_text_falls_back_with_warning() {
        let text = FakeText::new("Claro! Aqui está o carrossel pedido.");

        let result = generate(
            Some(&text),
            None::<&FakeImages>,
            &request("produtividade", 5),
        )
        .await;

        assert_eq!(result.slides.len(), 5);
        assert!(result.slides[0].title.contains("produtividade"));
        assert!(result.warning.is_some());
    }

    #[tokio::test]
    async fn test_no_text_provider_falls_back_with_warning() {
        let result = generate(
            None::<&FakeText>,
            None::<&FakeImages>,
            &request("vendas", 4),
        )
        .await;

        assert_eq!(result.slides.len(), 4);
        assert!(result.slides[0].title.contains("vendas"));
        assert!(result.warning.is_some());
    }

    #[tokio::test]
    async fn test_single_image_failure_degrades_with_warning() {
        let text = FakeText::new(&five_slides_json());
        let images = FakeImages {
            fail_marker: Some("Scene 3"),
        };

        let result = generate(
            Some(&text),
            Some(&images),
            &request("produtividade", 5),
        )
        .await;

        assert_eq!(result.slides.len(), 5);
        for (index, slide) in result.slides.iter().enumerate() {
            if index == 2 {
                assert!(slide.image.is_none());
            } else {
                let image = slide.image.as_deref().unwrap();
                assert!(image.starts_with("data:image/png;base64,"));
            }
        }
        assert!(result.warning.is_some());
    }

    #[tokio::test]
    async fn test_all_images_live_means_no_warning() {
        let text = FakeText::new(&five_slides_json());
        let images = FakeImages { fail_marker: None };

        let result = generate(
            Some(&text),
            Some(&images),
            &request("produtividade", 5),
        )
        .await;

        assert!(result.slides.iter().all(|s| s.image.is_some()));
        assert_eq!(result.warning, None);
    }

    #[tokio::test]
    async fn test_under_production_is_accepted_with_warning() {
        let text = FakeText::new(
            &json!({
                "slides": [
                    {"title": "Único", "body": "Só um slide veio."}
                ]
            })
            .to_string(),
        );

        let result = generate(
            Some(&text),
            None::<&FakeImages>,
            &request("produtividade", 5),
        )
        .await;

        assert_eq!(result.slides.len(), 1);
        assert!(result.warning.is_some());
    }

    #[tokio::test]
    async fn test_fenced_output_is_tolerated() {
        let text =
            FakeText::new(&format!("```json\n{}\n```", five_slides_json()));

        let result = generate(
            Some(&text),
            None::<&FakeImages>,
            &request("produtividade", 5),
        )
        .await;

        assert_eq!(result.slides.len(), 5);
        assert_eq!(result.warning, None);
    }
}
