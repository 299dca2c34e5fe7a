use axum::{
    http::{header, Method},
    routing::get,
    routing::post,
    Router,
};
use carousel::error::CarouselError;
use gemini::models::Models;
use toml::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use util::load_config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

pub mod generate;
pub mod healthz;
pub mod not_found;
mod response;

pub enum ApiError {
    ClientError(String),
    ServerError(String),
    GatewayError(String),
    GatewayTimeout(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    models: Option<Models>,
    config: Config,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini: Gemini,
}

#[derive(Clone, Debug)]
pub struct Gemini {
    pub generate_images: bool,
}

pub async fn serve(
    gemini_api_key: Option<String>,
    config_name: &str,
) -> anyhow::Result<Router> {
    #[utoipauto(
        paths = "./libs/api/src, ./libs/carousel/src from carousel"
    )]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "carousel", description = "Carousel generation API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let config = load_config(config_name)?;
    let generate_images = config
        .get("gemini")
        .and_then(|gemini| gemini.get("generate_images"))
        .and_then(Value::as_bool)
        .ok_or_else(|| {
            CarouselError::Configuration(format!(
                "{} is missing [gemini] generate_images",
                config_name
            ))
        })?;

    let models = match gemini_api_key {
        Some(api_key) => Some(Models::new(&api_key)),
        None => {
            warn!("no Gemini API key configured, serving fallback content");
            None
        }
    };

    let state = ApiState {
        models,
        config: Config {
            gemini: Gemini { generate_images },
        },
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .route("/generate", post(generate::generate_carousel))
        .with_state(state)
        .layer(cors)
        .fallback(not_found::get_404);

    Ok(router)
}
