use anyhow::Context;

use crate::models::Models;

use super::{TextGeneration, GEMINI_1_5_FLASH};

impl TextGeneration for Models {
    async fn gemini_1_5_flash(
        &self,
        request: super::GenerateContentRequest,
    ) -> anyhow::Result<super::GenerateContentResponse> {
        let text = self.string_response(request, GEMINI_1_5_FLASH).await?;

        let response = serde_json::from_str(&text)
            .context("failed to parse generateContent response")?;

        Ok(response)
    }
}
