use actix_web::{web, HttpServer};
use anyhow::Context;
use cv_api::{create_app, AppState};
use cv_infra::{create_repositories, create_sms_service};
use cv_shared::{AppConfig, Environment};
use log::{info, warn};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, then the per-environment overrides
    dotenvy::dotenv().ok();
    dotenvy::from_filename(Environment::from_env().env_file()).ok();

    let config = AppConfig::from_env();

    // Initialize logger; RUST_LOG takes precedence over LOG_LEVEL
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!(
        "Starting customer/vendor API ({} environment)",
        config.environment
    );

    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            log::error!("Configuration problem: {}", problem);
        }
        anyhow::bail!("invalid configuration: {}", problems.join("; "));
    }
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET_KEY is not set; using the development secret");
    }

    let repositories = create_repositories(&config.database)
        .await
        .context("failed to initialize the data store")?;
    let sms_service =
        create_sms_service(&config.sms).context("failed to initialize the SMS provider")?;

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let state = AppState::new(config, repositories, sms_service)
        .context("failed to initialize services")?;
    let state = web::Data::new(state);

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
