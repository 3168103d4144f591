use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use hb_api::app::create_app;
use hb_api::config::Config;
use hb_api::routes::AppState;
use hb_core::services::{AuthService, HbnbFacade, PasswordHasher, TokenService, TokenServiceConfig};
use hb_infra::database::{
    ensure_schema, DatabasePool, MySqlAmenityRepository, MySqlPlaceRepository,
    MySqlReviewRepository, MySqlUserRepository,
};
use hb_shared::config::Environment;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(environment.default_log_level()),
    );

    info!("Starting HBnB API Server ({})", environment);

    let config = Config::load().context("loading configuration")?;
    if config.app.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }

    let database = DatabasePool::new(config.app.database.clone())
        .await
        .context("connecting to the database")?;
    ensure_schema(database.get_pool())
        .await
        .context("creating the database schema")?;
    info!("{}", database.get_statistics());

    let pool = database.get_pool().clone();
    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let hasher = PasswordHasher::with_cost(config.app.auth.bcrypt_cost);

    let facade = Arc::new(HbnbFacade::new(
        Arc::clone(&users),
        Arc::new(MySqlPlaceRepository::new(pool.clone())),
        Arc::new(MySqlAmenityRepository::new(pool.clone())),
        Arc::new(MySqlReviewRepository::new(pool)),
        hasher,
    ));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
        &config.app.auth.jwt,
    )));
    let auth_service = Arc::new(AuthService::new(users, token_service, hasher));

    let app_state = web::Data::new(AppState::new(facade, auth_service).with_database(database));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.app.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
    .keep_alive(std::time::Duration::from_secs(config.app.server.keep_alive));

    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding to {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
