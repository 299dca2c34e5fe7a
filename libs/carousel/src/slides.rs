use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Text-only slide content, before image attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideDraft {
    pub title: String,
    pub body: String,
    #[serde(
        rename = "imagePrompt",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_prompt: Option<String>,
}

/// A finished slide. `image`, when present, is a
/// `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Slide {
    pub title: String,
    pub body: String,
    #[serde(
        rename = "imagePrompt",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_prompt: Option<String>,
    pub image: Option<String>,
}

impl Slide {
    pub fn new(draft: SlideDraft, image: Option<String>) -> Self {
        Self {
            title: draft.title,
            body: draft.body,
            image_prompt: draft.image_prompt,
            image,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerationResult {
    pub slides: Vec<Slide>,
    /// Set whenever a non-fatal degradation occurred (fallback content,
    /// missing images), so the caller can tell fully-live results apart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
