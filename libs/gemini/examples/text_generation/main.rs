use anyhow::Context;
use gemini::models::{
    self,
    text_generation::{GenerateContentRequest, TextGeneration},
};
use toml::{map::Map, Value};
use util::workspace_dir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secrets = load_env()?;

    let api_key = secrets.get("GEMINI_API_KEY").unwrap().as_str().unwrap();

    let models = models::Models::new(api_key);

    let result = models
        .gemini_1_5_flash(GenerateContentRequest::from_prompt(
            "Diga olá em uma frase.",
        ))
        .await?;

    println!("{}", result.text().unwrap_or_default());

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
