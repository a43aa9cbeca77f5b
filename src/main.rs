use anyhow::Result;
use studio_site::config::Config;
use studio_site::site::Site;
use studio_site::storage::FileStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studio_site=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    let store = FileStore::new(config.storage_path.clone());
    let mut site = Site::new(&config, store);

    // Optional language code, e.g. `studio-site ko`
    if let Some(code) = std::env::args().nth(1) {
        let language = site.choose_language_code(&code)?;
        info!("Language switched to {}", language.name());
    }

    println!("{}", site.render());

    let report = site.context().metrics().report();
    info!("Translation metrics: {}", serde_json::to_string(&report)?);

    Ok(())
}
