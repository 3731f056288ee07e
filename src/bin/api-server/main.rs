use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use restaurant_bridge::config::Config;

mod api;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let config = Config::from_env()?;
    let state = web::Data::new(api::ApiState::new(config.escaping));
    let origin = config.cors_origin.clone();

    tracing::info!(
        "listening on {}:{} with {:?} escaping",
        config.bind_addr,
        config.port,
        config.escaping
    );

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allowed_origin(&origin)
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(state.clone())
            .service(api::encode)
            .service(api::health)
    })
    .bind((config.bind_addr.as_str(), config.port))
    .with_context(|| format!("fail to bind {}:{}", config.bind_addr, config.port))?
    .run()
    .await?;
    Ok(())
}
