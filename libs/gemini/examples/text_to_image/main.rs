use std::{fs::File, io::Write};

use anyhow::Context;
use gemini::models::{
    self,
    text_to_image::{TextToImage, TextToImageRequest},
};
use toml::{map::Map, Value};
use util::workspace_dir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secrets = load_env()?;

    let api_key = secrets.get("GEMINI_API_KEY").unwrap().as_str().unwrap();

    let models = models::Models::new(api_key);

    let result = models
        .imagen_3_generate(TextToImageRequest::from_prompt(
            "A lighthouse on a cliff at dawn, cinematic",
        ))
        .await?;

    File::create("image.png")
        .unwrap()
        .write_all(&result.bytes)
        .unwrap();

    Ok(())
}

fn load_env() -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let secrets =
        std::fs::read_to_string(workspace_dir.join("Secrets.dev.toml"))
            .context("failed to read Secrets.dev.toml")?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .context("failed to parse Secrets.dev.toml")
}
