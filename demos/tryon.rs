use stylestudio::{encode_from_file, GeminiClient, GeminiConfig, TryOnRequest, BACKGROUND_PRESETS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    stylestudio::logger::init()?;

    let client = GeminiClient::new(GeminiConfig::from_env())?;

    let request = TryOnRequest {
        person: encode_from_file("person.jpg").await?,
        garments: vec![encode_from_file("garment.jpg").await?],
        garment_description: "Minimalist White T-Shirt".to_string(),
        background_directive: BACKGROUND_PRESETS[1].prompt.clone(),
        angle_labels: None,
    };

    let response = client.tryon().generate(request).await?;
    log::info!(
        "Generated composite with {} ({} characters of image data)",
        response.model,
        response.image_data.len()
    );

    Ok(())
}
