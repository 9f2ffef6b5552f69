use std::env;
use std::fs;
use stylestudio::{
    encode_files, encode_from_file, EncodedImage, GeminiClient, GeminiConfig, TryOnClient,
    TryOnRequest, BACKGROUND_PRESETS,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    stylestudio::logger::init_with_config(
        stylestudio::logger::LoggerConfig::development()
            .with_level(stylestudio::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking Gemini environment...");

    // Check the credential (without printing the actual value for security)
    match env::var("GEMINI_API_KEY").or_else(|_| env::var("GOOGLE_API_KEY")) {
        Ok(key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!("API key starts with: {}...", &key[..6.min(key.len())]);
        }
        Err(_) => {
            log::warn!("⚠️  No GEMINI_API_KEY or GOOGLE_API_KEY set");
            log::error!("❌ Generation requests will fail authentication");
        }
    }

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        log::error!(
            "Usage: {} <person-image> <garment-image> [<garment-image>...]",
            args[0]
        );
        return Ok(());
    }
    let person_path = &args[1];
    let garment_paths = &args[2..];

    log::info!("🔄 Creating Gemini client...");
    let client = match GeminiClient::new(GeminiConfig::from_env()) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🖼️  Available try-on models:");
    for (id, name, provider) in TryOnClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    let person = encode_from_file(person_path).await?;
    let garments = encode_files(garment_paths).await?;
    log::info!(
        "📦 Encoded 1 person image and {} garment image(s)",
        garments.len()
    );

    let background = &BACKGROUND_PRESETS[0];
    log::info!("🎨 Background scene: {}", background.name);

    let request = TryOnRequest {
        person,
        garments,
        garment_description: "Designer custom combination".to_string(),
        background_directive: background.prompt.clone(),
        angle_labels: None,
    };

    let result = {
        let _timer = stylestudio::logger::timer("virtual try-on generation");
        client.tryon().generate(request).await
    };

    match result {
        Ok(response) => {
            log::info!("✅ Try-on generation successful!");
            log::info!("🤖 Model used: {}", response.model);
            log::info!(
                "📏 Image data length: {} characters",
                response.image_data.len()
            );

            let filename = format!("tryon_result_{}.png", chrono::Utc::now().timestamp());
            let image = EncodedImage::from_data_uri(&response.image_data)?;
            match image.decode() {
                Ok(bytes) => match fs::write(&filename, bytes) {
                    Ok(_) => log::info!("💾 Composite saved to: {}", filename),
                    Err(e) => log::error!("❌ Failed to save composite: {}", e),
                },
                Err(e) => log::error!("❌ Failed to decode base64 image: {}", e),
            }
        }
        Err(e) => {
            log::error!("❌ Try-on generation failed: {}", e);
            log::warn!("💡 The rendering engine may be busy; try again shortly");
        }
    }

    Ok(())
}
