use axum::{extract::State, Json};
use carousel::{
    pipeline, request::GenerationRequest, slides::GenerationResult,
};
use serde_json::Value;

pub mod request;

use crate::response::ApiResponse;
use crate::ApiState;

use self::request::GenerateCarouselRequest;

/// Generate a carousel for a topic
#[utoipa::path(
    post,
    path = "/generate",
    tag = "carousel",
    request_body = GenerateCarouselRequest,
    responses(
        (status = 200, description = "Carousel generated, possibly degraded (see `warning`)", body = GenerationResult),
        (status = 400, description = "Missing or empty topic"),
    )
)]
pub async fn generate_carousel(
    State(state): State<ApiState>,
    body: Option<Json<Value>>,
) -> ApiResponse<Json<GenerationResult>> {
    // an unparseable body is treated as empty and fails topic validation
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);
    let request = GenerationRequest::from_value(&body)?;

    let text = state.models.as_ref();
    let image = if state.config.gemini.generate_images {
        state.models.as_ref()
    } else {
        None
    };

    let result = pipeline::generate(text, image, &request).await;

    Ok(Json(result))
}
