mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod utils;

#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::middleware::{create_cors, RequestLogging};
use crate::routes::app_api_routes;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use chrono::Local;
use log::info;
use std::error::Error;
use std::io;
use std::io::Write;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    log_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.args()
            )
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e)) // 转换为 io::Result
        })
        .init();

    // 加载配置
    let config = Config::from_env()?;
    config.validate()?;

    let bind_address = config.bind_address();
    let workers = config.server.workers;
    let max_upload_size = config.server.max_upload_size;
    let cors_config = config.cors.clone();

    info!("Backend API: {}", config.api.server_url);
    let app_state = web::Data::new(AppState::new(config)?);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(create_cors(&cors_config))
            .wrap(RequestLogging)
            .service(app_api_routes(max_upload_size))
    });

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    info!("Storefront gateway listening on {}", bind_address);
    server.bind(&bind_address)?.run().await?;

    info!("Storefront gateway stopped");
    Ok(())
}
