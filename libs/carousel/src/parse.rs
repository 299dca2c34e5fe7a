use serde::Deserialize;

use crate::{error::CarouselError, slides::SlideDraft};

#[derive(Deserialize)]
struct SlidesPayload {
    slides: Vec<SlideDraft>,
}

/// Parses raw model output into slide drafts.
///
/// Generative models do not reliably honor "no markdown" instructions, so
/// leading/trailing code fences (optionally language-tagged) are stripped
/// before parsing. Anything else that is not the expected shape is a
/// `Parse` failure; no semantic repair is attempted. Over-production is
/// truncated to `slide_count`; under-production is accepted as-is.
pub fn parse_slides(
    raw: &str,
    slide_count: usize,
) -> Result<Vec<SlideDraft>, CarouselError> {
    let cleaned = strip_code_fences(raw);

    let payload: SlidesPayload = serde_json::from_str(cleaned)
        .map_err(|e| CarouselError::Parse(e.to_string()))?;

    if payload.slides.is_empty() {
        return Err(CarouselError::Parse(
            "resposta sem slides".to_string(),
        ));
    }

    let mut slides = payload.slides;
    slides.truncate(slide_count);

    Ok(slides)
}

// Leading/trailing fences only. This is a tolerant-input adapter, not a
// repair mechanism.
fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // drop an optional language tag such as "json" or "JSON"
        let rest =
            rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        text = rest.trim_start();
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text
}
