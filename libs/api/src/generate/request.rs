use serde::Deserialize;
use utoipa::ToSchema;

/// Documented wire shape of the generate endpoint body. The handler takes
/// a raw JSON value so a malformed `total` can be coerced instead of
/// rejecting the whole request.
#[derive(Deserialize, ToSchema)]
pub struct GenerateCarouselRequest {
    pub topic: String,
    pub total: Option<i64>,
}
