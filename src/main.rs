use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use chrono::Duration;
use log::info;

use taskvault::config::Config;
use taskvault::session::SessionStore;
use taskvault::{db, routes, secrets};

// How often the background task sweeps expired sessions.
const SESSION_PURGE_INTERVAL_SECS: u64 = 60 * 60;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let credentials = secrets::retrieve_db_credentials(&config.vault_url())
        .await
        .expect("Failed to retrieve database credentials from key vault");

    let pool = db::build_pool(&config, &credentials)
        .await
        .expect("Failed to connect to database");

    let session_store = web::Data::new(SessionStore::new(Duration::hours(
        config.session_ttl_hours,
    )));

    let purge_store = session_store.clone();
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(SESSION_PURGE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let purged = purge_store.purge_expired();
            if purged > 0 {
                info!("Evicted {} expired sessions", purged);
            }
        }
    });

    let cors_origin = config.cors_origin.clone();
    let bind_addr = (config.server_host.clone(), config.server_port);

    info!("Starting taskvault server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(session_store.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&cors_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                    .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
                    .supports_credentials()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
