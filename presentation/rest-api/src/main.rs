use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod favorite {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod recipe {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod mealdb_config;
    pub mod server_config;
    pub mod storage_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point: recipe search plus a persisted favorites list.
///
/// - config/: environment driven settings (server, CORS, catalog, storage)
/// - setup/: dependency wiring and the HTTP server
/// - api/: routes, DTOs and error mapping per resource
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, RUST_LOG included
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies, opening the selected storage backend
    let container = DependencyContainer::new(&config.storage, &config.mealdb).await?;

    // 5. Run server
    Server::run(config.server, config.cors, container).await?;

    Ok(())
}
