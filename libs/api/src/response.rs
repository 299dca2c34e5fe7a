use axum::{http::StatusCode, response::IntoResponse, Json};
use carousel::error::CarouselError;
use serde_json::json;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::GatewayError(message) => {
                (StatusCode::BAD_GATEWAY, message)
            }
            ApiError::GatewayTimeout(message) => {
                (StatusCode::GATEWAY_TIMEOUT, message)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

impl From<CarouselError> for ApiError {
    fn from(e: CarouselError) -> Self {
        error!("{:?}", e);

        match e {
            CarouselError::Validation(message) => {
                ApiError::ClientError(message)
            }
            CarouselError::Configuration(_) => ApiError::ServerError(
                "Configuração do servidor incompleta.".to_string(),
            ),
            CarouselError::Provider { .. } => ApiError::GatewayError(
                "Erro de comunicação com o provedor de IA.".to_string(),
            ),
            CarouselError::ProviderTimeout(_) => ApiError::GatewayTimeout(
                "Tempo limite excedido ao comunicar com a IA.".to_string(),
            ),
            CarouselError::Parse(_) => ApiError::GatewayError(
                "A IA retornou um formato inválido.".to_string(),
            ),
        }
    }
}
