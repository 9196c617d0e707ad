use axum::extract::DefaultBodyLimit;
use portfolio::server::{config::Config, error::Error, router, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_app_state(db).await?;

    let app = router::routes()
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.upload_limit_bytes));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
