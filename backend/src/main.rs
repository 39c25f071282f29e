mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let server = ServerConfig::from_env();
    let url = server.url();

    if server.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url_clone) {
                warn!("Could not open a browser at {}: {}", url_clone, err);
            }
        });
    }

    info!("Site data workflow: {}", server.client.site_data_url);
    info!("Submission workflow: {}", server.client.submission_url);
    info!("Server running at {}", url);

    let client = web::Data::new(server.client.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((server.host.as_str(), server.port))?
        .run()
        .await
}
