use anyhow::{Context, Result};
use residencia_web::config::Config;
use residencia_web::i18n::TranslationValidator;
use residencia_web::server::{create_router, AppState};
use residencia_web::site::SiteConfig;
use std::net::SocketAddr;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (absent in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("residencia_web=info".parse()?),
        )
        .init();

    info!("Starting residencia-web v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment
    let config = Config::from_env()?;
    SiteConfig::validate(config.environment)?;

    let state = AppState::new(config)?;

    if !state.contact.mailer().is_configured() {
        warn!("RESEND_API_KEY not set; contact submissions will fail with a configuration error");
    }

    // Translation coverage is reported, never fatal
    let report = TranslationValidator::coverage(&state.translations);
    for error in &report.errors {
        warn!("Translation error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Translation warning: {}", warning);
    }
    if report.is_clean() {
        info!("Translation catalogs complete");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}
